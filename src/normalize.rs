const TRIPLE_BREAK: &str = "\n\n\n";
const DOUBLE_BREAK: &str = "\n\n";

/// How the triple-break replacement is applied to a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplaceMode {
    /// One non-overlapping left-to-right pass. A run of N line breaks
    /// becomes N - N/3, so a run of 4 ends up as 3.
    #[default]
    SinglePass,
    /// Repeat the pass until nothing changes. Every run of three or more
    /// line breaks ends up as exactly two.
    UntilStable,
}

impl ReplaceMode {
    /// Apply this mode to `text`, returning the normalized document.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::SinglePass => collapse_triple_breaks(text),
            Self::UntilStable => {
                let mut current = collapse_triple_breaks(text);
                while current.contains(TRIPLE_BREAK) {
                    current = collapse_triple_breaks(&current);
                }
                current
            }
        }
    }
}

/// Replace every literal `"\n\n\n"` with `"\n\n"`.
///
/// Matches are found leftmost-first and never overlap, and the output is not
/// rescanned. `\r` is not treated as a line break.
pub fn collapse_triple_breaks(text: &str) -> String {
    text.replace(TRIPLE_BREAK, DOUBLE_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaks(n: usize) -> String {
        "\n".repeat(n)
    }

    #[test]
    fn test_collapse_no_runs_is_identity() {
        let input = "# Title\n\nParagraph one.\nStill one.\n\nParagraph two.\n";
        assert_eq!(collapse_triple_breaks(input), input);
    }

    #[test]
    fn test_collapse_empty_input() {
        assert_eq!(collapse_triple_breaks(""), "");
    }

    #[test]
    fn test_collapse_run_of_three() {
        assert_eq!(collapse_triple_breaks("a\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_collapse_run_of_four_leaves_three() {
        assert_eq!(collapse_triple_breaks("a\n\n\n\nb"), "a\n\n\nb");
    }

    #[test]
    fn test_collapse_run_of_six_leaves_four() {
        let input = format!("a{}b", breaks(6));
        assert_eq!(collapse_triple_breaks(&input), format!("a{}b", breaks(4)));
    }

    #[test]
    fn test_collapse_run_length_formula() {
        for n in 0..=20 {
            let input = format!("x{}y", breaks(n));
            let expected = format!("x{}y", breaks(n - n / 3));
            assert_eq!(collapse_triple_breaks(&input), expected, "run of {n}");
        }
    }

    #[test]
    fn test_collapse_mixed_runs() {
        assert_eq!(
            collapse_triple_breaks("A\n\n\nB\n\n\n\n\nC"),
            "A\n\nB\n\n\n\nC"
        );
    }

    #[test]
    fn test_collapse_leading_and_trailing_runs() {
        assert_eq!(collapse_triple_breaks("\n\n\nbody\n\n\n"), "\n\nbody\n\n");
    }

    #[test]
    fn test_collapse_ignores_crlf() {
        let input = "a\r\n\r\n\r\nb";
        assert_eq!(collapse_triple_breaks(input), input);
    }

    #[test]
    fn test_collapse_preserves_unicode() {
        assert_eq!(
            collapse_triple_breaks("한국어\n\n\n中文 🚀"),
            "한국어\n\n中文 🚀"
        );
    }

    #[test]
    fn test_single_pass_is_default() {
        assert_eq!(ReplaceMode::default(), ReplaceMode::SinglePass);
        assert_eq!(ReplaceMode::SinglePass.apply("a\n\n\n\nb"), "a\n\n\nb");
    }

    #[test]
    fn test_until_stable_collapses_every_run_to_two() {
        for n in 2..=40 {
            let input = format!("x{}y", breaks(n));
            assert_eq!(ReplaceMode::UntilStable.apply(&input), "x\n\ny", "run of {n}");
        }
    }

    #[test]
    fn test_until_stable_keeps_single_breaks() {
        assert_eq!(ReplaceMode::UntilStable.apply("a\nb\n"), "a\nb\n");
    }

    #[test]
    fn test_repeated_single_pass_stabilizes() {
        for n in 3..=40 {
            let mut text = format!("x{}y", breaks(n));
            let mut passes = 0;
            while text.contains(TRIPLE_BREAK) {
                text = ReplaceMode::SinglePass.apply(&text);
                passes += 1;
                assert!(passes <= n, "run of {n} did not stabilize");
            }
            assert_eq!(text, "x\n\ny");
        }
    }
}
