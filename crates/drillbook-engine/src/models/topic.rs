use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};

use super::ExerciseFile;

/// Which parser a topic's files go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// `.sql` scripts made of commented tasks.
    Sql,
    /// Jupyter `.ipynb` notebooks.
    Notebook,
}

impl ContentKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ContentKind::Sql => "sql",
            ContentKind::Notebook => "ipynb",
        }
    }

    /// MIME type used when exporting raw files.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ContentKind::Sql => "application/sql",
            ContentKind::Notebook => "application/x-ipynb+json",
        }
    }
}

const COLAB_BASE: &str =
    "https://colab.research.google.com/github/mhoffmannac/nfl-ds-challenges/blob/main";

/// One browsable collection of exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    /// Directory holding the files, relative to the exercises root.
    pub dir: RelativePathBuf,
    pub kind: ContentKind,
    /// Directory with the unsolved counterparts of the files in `dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges_dir: Option<RelativePathBuf>,
    /// Prefix for "open in Colab" links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colab_url: Option<String>,
    /// Supporting data shipped with every export, e.g. a database dump.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<RelativePathBuf>,
    /// One-line summary shown before a file is picked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Topic {
    pub fn new(title: &str, dir: &str, kind: ContentKind) -> Self {
        Self {
            title: title.to_string(),
            dir: RelativePathBuf::from(dir),
            kind,
            challenges_dir: None,
            colab_url: None,
            data_file: None,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// The topics of the stock exercise collection.
    pub fn defaults() -> Vec<Topic> {
        vec![
            Topic::new("Pandas", "exercises/pandas", ContentKind::Notebook).with_description(
                "Tasks to practice data manipulation and analysis using the Pandas library.",
            ),
            Topic {
                colab_url: Some(COLAB_BASE.to_string()),
                ..Topic::new("A/B-Testing", "exercises/abtesting", ContentKind::Notebook)
                    .with_description(
                        "Tasks to practice A/B testing concepts and statistical analysis.",
                    )
            },
            Topic {
                challenges_dir: Some(RelativePathBuf::from("exercises/sql/challenges")),
                data_file: Some(RelativePathBuf::from(
                    "exercises/sql/data/espn_small_dump.sql",
                )),
                ..Topic::new("SQL", "exercises/sql/solutions", ContentKind::Sql).with_description(
                    "Tasks to practice SQL queries and database management utilizing mySQL.",
                )
            },
            Topic::new("ETL", "exercises/etl", ContentKind::Notebook).with_description(
                "Tasks to practice the ETL process, including data extraction, transformation, and loading.",
            ),
        ]
    }

    /// Link that opens `file` in Google Colab, for topics that have one.
    pub fn colab_link(&self, file: &ExerciseFile) -> Option<String> {
        self.colab_url.as_ref().map(|base| {
            format!(
                "{}/{}",
                base.trim_end_matches('/'),
                file.relative_path()
            )
        })
    }

    /// Path of the unsolved counterpart of `file`, if the topic keeps one.
    pub fn challenge_for(&self, file: &ExerciseFile) -> Option<RelativePathBuf> {
        self.challenges_dir
            .as_ref()
            .map(|dir| dir.join(file.download_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_cover_every_stock_topic() {
        let titles: Vec<_> = Topic::defaults().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Pandas", "A/B-Testing", "SQL", "ETL"]);
    }

    #[test]
    fn sql_challenge_path() {
        let sql = &Topic::defaults()[2];
        let file = ExerciseFile::from("exercises/sql/solutions/03_grouping_solutions.sql");
        assert_eq!(
            sql.challenge_for(&file),
            Some(RelativePathBuf::from("exercises/sql/challenges/03_grouping.sql"))
        );
    }

    #[test]
    fn only_sql_ships_a_data_file() {
        let with_data: Vec<_> = Topic::defaults()
            .into_iter()
            .filter(|t| t.data_file.is_some())
            .map(|t| t.title)
            .collect();
        assert_eq!(with_data, ["SQL"]);
    }

    #[test]
    fn every_default_topic_is_described() {
        assert!(Topic::defaults().iter().all(|t| t.description.is_some()));
        assert_eq!(Topic::new("R", "r", ContentKind::Notebook).description, None);
    }

    #[test]
    fn notebook_topics_have_no_challenges() {
        let pandas = &Topic::defaults()[0];
        assert_eq!(pandas.challenge_for(&ExerciseFile::from("a.ipynb")), None);
    }

    #[test]
    fn colab_link() {
        let ab = &Topic::defaults()[1];
        let file = ExerciseFile::from("exercises/abtesting/ab_test_solutions.ipynb");
        assert_eq!(
            ab.colab_link(&file).as_deref(),
            Some(
                "https://colab.research.google.com/github/mhoffmannac/nfl-ds-challenges/blob/main/exercises/abtesting/ab_test_solutions.ipynb"
            )
        );
        assert_eq!(Topic::defaults()[0].colab_link(&file), None);
    }
}
