use crate::entities::MonthIndex;

/// Lowercases with Turkish casing rules ('I' → 'ı', 'İ' → 'i').
pub(crate) fn tr_lowercase(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            'I' => vec!['ı'],
            'İ' => vec!['i'],
            c => c.to_lowercase().collect(),
        })
        .collect()
}

/// Uppercases with Turkish casing rules ('i' → 'İ', 'ı' → 'I').
pub(crate) fn tr_uppercase(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            'i' => vec!['İ'],
            'ı' => vec!['I'],
            c => c.to_uppercase().collect(),
        })
        .collect()
}

/// Capitalizes each whitespace-separated word, collapsing repeated spaces.
pub(crate) fn tr_title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    tr_uppercase(&first.to_string()) + &tr_lowercase(chars.as_str())
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Joins month names the Turkish way: "Ocak", "Ocak ve Mart",
/// "Ocak, Şubat ve Mart".
pub(crate) fn join_month_names(months: &[MonthIndex]) -> String {
    let names: Vec<&str> = months.iter().map(|m| m.name()).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} ve {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(indices: &[usize]) -> Vec<MonthIndex> {
        indices.iter().map(|i| MonthIndex::new(*i).unwrap()).collect()
    }

    #[test]
    fn joins_month_names_with_conjunction() {
        assert_eq!(join_month_names(&months(&[])), "");
        assert_eq!(join_month_names(&months(&[0])), "Ocak");
        assert_eq!(join_month_names(&months(&[0, 2])), "Ocak ve Mart");
        assert_eq!(join_month_names(&months(&[0, 1, 2])), "Ocak, Şubat ve Mart");
    }

    #[test]
    fn title_cases_with_turkish_dotted_i() {
        assert_eq!(tr_title_case("  ismail   IŞIK "), "İsmail Işık");
        assert_eq!(tr_title_case("ÇAĞRI öztürk"), "Çağrı Öztürk");
    }

    #[test]
    fn lowercases_dotted_capital_i_without_combining_mark() {
        assert_eq!(tr_lowercase("İLKER"), "ilker");
    }
}
