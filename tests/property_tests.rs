use code_probe::{
    analyze_imports, calculate_complexity, count_lines, file_extension, is_code_file,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn classification_sums_to_total(content in "[\\x00-\\x7F]{0,400}") {
        let stats = count_lines(&content);
        prop_assert_eq!(stats.code + stats.blank + stats.comment, stats.total);
    }

    #[test]
    fn total_is_one_more_than_newline_count(content in "[\\x00-\\x7F]{0,400}") {
        // Splitting on '\n' always yields one more piece than there are
        // newlines, including for the empty string.
        let stats = count_lines(&content);
        let newlines = content.matches('\n').count();
        prop_assert_eq!(stats.total, newlines + 1);
    }

    #[test]
    fn complexity_score_is_at_least_one(content in "\\PC{0,300}") {
        prop_assert!(calculate_complexity(&content) >= 1);
    }

    #[test]
    fn imports_are_sorted_and_unique(
        content in "(import [a-d]{1,3}(\\.[a-d]{1,2})?\\n){0,6}"
    ) {
        let names = analyze_imports(&content);
        for pair in names.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn extensions_are_lowercase(
        filename in "[A-Za-z0-9]{1,8}(\\.[A-Za-z0-9]{1,4}){0,3}"
    ) {
        let ext = file_extension(&filename);
        prop_assert_eq!(ext.to_lowercase(), ext);
    }

    #[test]
    fn code_files_always_have_an_extension(filename in "[A-Za-z0-9.]{0,16}") {
        if is_code_file(&filename) {
            prop_assert!(!file_extension(&filename).is_empty());
        }
    }
}
