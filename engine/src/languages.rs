use std::{collections::HashSet, fs, path::Path};

use itertools::Itertools;

pub const DEFAULT_LANGUAGE_NAME: &str = "English";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub code: &'static str,
}

const fn language(name: &'static str, code: &'static str) -> Language {
    Language { name, code }
}

#[rustfmt::skip]
pub const ALL_LANGUAGES: [Language; 30] = [
    language("Arabic", "arabic"),
    language("Bulgarian", "bulgarian"),
    language("Chinese (Simplified)", "schinese"),
    language("Chinese (Traditional)", "tchinese"),
    language("Czech", "czech"),
    language("Danish", "danish"),
    language("Dutch", "dutch"),
    language("English", "english"),
    language("Finnish", "finnish"),
    language("French", "french"),
    language("German", "german"),
    language("Greek", "greek"),
    language("Hungarian", "hungarian"),
    language("Indonesian", "indonesian"),
    language("Italian", "italian"),
    language("Japanese", "japanese"),
    language("Korean", "koreana"),
    language("Norwegian", "norwegian"),
    language("Polish", "polish"),
    language("Portuguese", "portuguese"),
    language("Portuguese-Brazil", "brazilian"),
    language("Romanian", "romanian"),
    language("Russian", "russian"),
    language("Spanish-Spain", "spanish"),
    language("Spanish-Latin America", "latam"),
    language("Swedish", "swedish"),
    language("Thai", "thai"),
    language("Turkish", "turkish"),
    language("Ukrainian", "ukrainian"),
    language("Vietnamese", "vietnamese"),
];

/// Parses a supported languages list: one code per line, blank lines ignored.
pub fn parse_supported_languages(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_owned)
        .collect()
}

/// The languages offered to the user, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    entries: Vec<Language>,
}

impl LanguageTable {
    pub fn all() -> Self {
        LanguageTable {
            entries: ALL_LANGUAGES.to_vec(),
        }
    }

    /// Keeps only languages whose code is in `allowed`. An empty set keeps all.
    pub fn filtered(allowed: &HashSet<String>) -> Self {
        if allowed.is_empty() {
            return LanguageTable::all();
        }
        LanguageTable {
            entries: ALL_LANGUAGES
                .iter()
                .filter(|language| allowed.contains(language.code))
                .copied()
                .collect_vec(),
        }
    }

    /// Loads the table filtered by the list at `path`. A missing or
    /// unreadable list offers every language.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no supported languages list at {}", path.display());
            return LanguageTable::all();
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                let table = LanguageTable::filtered(&parse_supported_languages(&contents));
                log::info!("{} supported languages", table.len());
                table
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                LanguageTable::all()
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Language> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn code_for(&self, name: &str) -> Option<&'static str> {
        self.iter().find(|l| l.name == name).map(|l| l.code)
    }

    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        self.iter().find(|l| l.code == code).map(|l| l.name)
    }

    pub fn position_of_name(&self, name: &str) -> Option<usize> {
        self.iter().position(|l| l.name == name)
    }

    /// Display name for a stored code, "English" if absent or unknown.
    pub fn display_name_for(&self, code: Option<&str>) -> &'static str {
        code.and_then(|code| self.name_for(code))
            .unwrap_or(DEFAULT_LANGUAGE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_file(dir: &Path, relative_path: &str, contents: &str) -> PathBuf {
        let path = dir.join(relative_path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn full_table_has_thirty_unique_entries() {
        let table = LanguageTable::all();

        assert_eq!(table.len(), 30);
        assert_eq!(table.iter().map(|l| l.code).unique().count(), 30);
        assert_eq!(table.iter().map(|l| l.name).unique().count(), 30);
    }

    #[test]
    fn filter_keeps_only_listed_codes() {
        let allowed = parse_supported_languages("english\ngerman\n");

        let table = LanguageTable::filtered(&allowed);

        assert_eq!(
            table.iter().map(|l| l.name).collect_vec(),
            vec!["English", "German"]
        );
    }

    #[test]
    fn supported_languages_are_whitespace_stripped() {
        let allowed = parse_supported_languages("  schinese \r\n\n\tlatam\n");

        assert_eq!(
            allowed,
            HashSet::from(["schinese".to_owned(), "latam".to_owned()])
        );
    }

    #[test]
    fn empty_filter_offers_all_languages() {
        let allowed = parse_supported_languages("\n  \n");

        assert_eq!(LanguageTable::filtered(&allowed), LanguageTable::all());
    }

    #[test]
    fn unknown_codes_in_filter_are_ignored() {
        let allowed = parse_supported_languages("klingon\nthai\n");

        let table = LanguageTable::filtered(&allowed);

        assert_eq!(table.iter().map(|l| l.code).collect_vec(), vec!["thai"]);
    }

    #[test]
    fn missing_list_file_offers_all_languages() {
        let dir = tempdir().unwrap();

        let table = LanguageTable::load(&dir.path().join("supported_languages.txt"));

        assert_eq!(table, LanguageTable::all());
    }

    #[test]
    fn list_file_filters_table() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "supported_languages.txt", "english\ngerman\n");

        let table = LanguageTable::load(&path);

        assert_eq!(table.len(), 2);
        assert_eq!(table.code_for("German"), Some("german"));
        assert_eq!(table.code_for("French"), None);
    }

    #[parameterized(
        code = { Some("koreana"), Some("brazilian"), Some("klingon"), None },
        expected = { "Korean", "Portuguese-Brazil", "English", "English" }
    )]
    fn display_name_defaults_to_english(code: Option<&str>, expected: &str) {
        assert_eq!(LanguageTable::all().display_name_for(code), expected);
    }

    #[test]
    fn lookups_are_bidirectional() {
        let table = LanguageTable::all();
        for language in table.iter() {
            assert_eq!(table.code_for(language.name), Some(language.code));
            assert_eq!(table.name_for(language.code), Some(language.name));
        }
    }

    #[test]
    fn position_of_name_indexes_filtered_table() {
        let table = LanguageTable::filtered(&parse_supported_languages("english\ngerman"));

        assert_eq!(table.position_of_name("German"), Some(1));
        assert_eq!(table.position_of_name("Arabic"), None);
    }
}
