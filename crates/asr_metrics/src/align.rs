/// Edit-operation counts turning a reference sequence into a hypothesis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alignment {
    pub distance: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
}

/// Minimum-edit-distance alignment with unit costs, classifying each edit.
///
/// Where several optimal paths exist the backtrace prefers substitution
/// over deletion over insertion, so operation counts are deterministic.
pub fn align<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> Alignment {
    let rows = reference.len() + 1;
    let cols = hypothesis.len() + 1;

    // Dense table; the backtrace revisits arbitrary cells, so the
    // rolling-row reduction used for distance-only passes does not apply.
    let mut table = vec![0usize; rows * cols];
    for i in 0..rows {
        table[i * cols] = i;
    }
    for j in 0..cols {
        table[j] = j;
    }
    for i in 1..rows {
        for j in 1..cols {
            table[i * cols + j] = if reference[i - 1] == hypothesis[j - 1] {
                table[(i - 1) * cols + (j - 1)]
            } else {
                let del = table[(i - 1) * cols + j];
                let ins = table[i * cols + (j - 1)];
                let sub = table[(i - 1) * cols + (j - 1)];
                1 + del.min(ins).min(sub)
            };
        }
    }

    let mut result = Alignment {
        distance: table[rows * cols - 1],
        ..Alignment::default()
    };
    let mut i = reference.len();
    let mut j = hypothesis.len();
    while i > 0 || j > 0 {
        if i == 0 {
            result.insertions += j;
            break;
        }
        if j == 0 {
            result.deletions += i;
            break;
        }
        if reference[i - 1] == hypothesis[j - 1] {
            i -= 1;
            j -= 1;
            continue;
        }
        let here = table[i * cols + j];
        if here == table[(i - 1) * cols + (j - 1)] + 1 {
            result.substitutions += 1;
            i -= 1;
            j -= 1;
        } else if here == table[(i - 1) * cols + j] + 1 {
            result.deletions += 1;
            i -= 1;
        } else {
            result.insertions += 1;
            j -= 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_exact() {
        let a = align(&["a", "b", "c"], &["a", "b", "c"]);
        assert_eq!(a, Alignment::default());
    }

    #[test]
    fn test_align_substitution() {
        let a = align(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(a.distance, 1);
        assert_eq!(a.substitutions, 1);
        assert_eq!(a.deletions, 0);
        assert_eq!(a.insertions, 0);
    }

    #[test]
    fn test_align_deletion() {
        let a = align(&["a", "b", "c"], &["a", "c"]);
        assert_eq!(a.distance, 1);
        assert_eq!(a.deletions, 1);
        assert_eq!(a.substitutions, 0);
        assert_eq!(a.insertions, 0);
    }

    #[test]
    fn test_align_insertion() {
        let a = align(&["a", "b"], &["a", "b", "c"]);
        assert_eq!(a.distance, 1);
        assert_eq!(a.insertions, 1);
        assert_eq!(a.substitutions, 0);
        assert_eq!(a.deletions, 0);
    }

    #[test]
    fn test_align_tie_break_prefers_substitution() {
        // "a" -> "b" could be del+ins; the backtrace must report one substitution.
        let a = align(&["a"], &["b"]);
        assert_eq!(a.distance, 1);
        assert_eq!(a.substitutions, 1);
        assert_eq!(a.deletions, 0);
        assert_eq!(a.insertions, 0);
    }

    #[test]
    fn test_align_empty_sides() {
        assert_eq!(align::<&str>(&[], &[]), Alignment::default());

        let a = align(&[], &["x", "y"]);
        assert_eq!(a.distance, 2);
        assert_eq!(a.insertions, 2);

        let a = align(&["x", "y", "z"], &[]);
        assert_eq!(a.distance, 3);
        assert_eq!(a.deletions, 3);
    }

    #[test]
    fn test_align_counts_sum_to_distance() {
        let a = align(
            &["the", "quick", "brown", "fox", "jumps"],
            &["the", "quick", "red", "fox", "over", "jumps"],
        );
        assert_eq!(
            a.distance,
            a.substitutions + a.deletions + a.insertions
        );
    }

    #[test]
    fn test_align_distance_symmetric() {
        let r = ["a", "b", "c", "d"];
        let h = ["a", "x", "d"];
        assert_eq!(align(&r, &h).distance, align(&h, &r).distance);
    }

    #[test]
    fn test_align_chars() {
        let r: Vec<char> = "kitten".chars().collect();
        let h: Vec<char> = "sitting".chars().collect();
        let a = align(&r, &h);
        assert_eq!(a.distance, 3);
        assert_eq!(a.substitutions, 2);
        assert_eq!(a.insertions, 1);
    }
}
