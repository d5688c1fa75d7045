//! Option-name canonicalization shared by `WITH (...)` blocks, `OPTION
//! (...)` query hints, and `RESTORE ... WITH (...)` clauses.

/// Maps a `WITH`/`OPTION` option's raw spelling (case-insensitive) to its
/// canonical form, per the fixed table. Anything not in the table falls
/// back to first-letter-uppercased, rest-lowercased.
pub fn canonicalize_option_name(raw: &str) -> String {
    let upper = raw.to_ascii_uppercase();
    match upper.as_str() {
        "FILLFACTOR" => "FillFactor".to_string(),
        "PAD_INDEX" => "PadIndex".to_string(),
        "SORT_IN_TEMPDB" => "SortInTempDB".to_string(),
        "STATISTICS_NORECOMPUTE" => "StatisticsNoRecompute".to_string(),
        "HOLDLOCK" => "HoldLock".to_string(),
        "NOWAIT" => "NoWait".to_string(),
        "LABEL" => "Label".to_string(),
        "MAX_GRANT_PERCENT" => "MaxGrantPercent".to_string(),
        _ => title_case_first_letter(&upper),
    }
}

fn title_case_first_letter(upper: &str) -> String {
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.as_str().to_ascii_lowercase();
            format!("{}{}", first, rest)
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_options_map_to_fixed_spellings() {
        assert_eq!(canonicalize_option_name("fillfactor"), "FillFactor");
        assert_eq!(canonicalize_option_name("PAD_INDEX"), "PadIndex");
        assert_eq!(canonicalize_option_name("holdlock"), "HoldLock");
    }

    #[test]
    fn unmapped_options_fall_back_to_title_case() {
        assert_eq!(canonicalize_option_name("ONLINE"), "Online");
        assert_eq!(canonicalize_option_name("recompile"), "Recompile");
    }
}
