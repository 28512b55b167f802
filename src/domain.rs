use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Subject area a single request is locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Domain {
    #[default]
    General,
    Python,
    Sql,
    MachineLearning,
    DataScience,
}

/// Row of the scope table: what counts as in-bounds for one domain.
#[derive(Debug, Clone, Copy)]
pub struct DomainScope {
    pub domain: Domain,
    pub topics: &'static [&'static str],
}

static SCOPES: [DomainScope; 5] = [
    DomainScope {
        domain: Domain::Sql,
        topics: &[
            "Queries (SELECT, JOIN, GROUP BY, WINDOW FUNCTIONS)",
            "Indexes, constraints, normalization",
            "Stored procedures, views",
            "Database concepts ONLY",
        ],
    },
    DomainScope {
        domain: Domain::Python,
        topics: &[
            "Python syntax, functions, OOP",
            "Algorithms implemented in Python",
            "Libraries like numpy, pandas, matplotlib",
        ],
    },
    DomainScope {
        domain: Domain::MachineLearning,
        topics: &[
            "ML algorithms, math intuition",
            "Model training, evaluation",
            "Scikit-learn, deep learning concepts",
        ],
    },
    DomainScope {
        domain: Domain::DataScience,
        topics: &[
            "EDA, statistics",
            "Feature engineering",
            "Data pipelines, visualization",
        ],
    },
    DomainScope {
        domain: Domain::General,
        topics: &["Basic CS theory only", "No coding unless explicitly asked"],
    },
];

impl Domain {
    /// Selector order shown to users.
    pub const ALL: [Domain; 5] = [
        Domain::General,
        Domain::Python,
        Domain::Sql,
        Domain::MachineLearning,
        Domain::DataScience,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::General => "General",
            Domain::Python => "Python",
            Domain::Sql => "SQL",
            Domain::MachineLearning => "Machine Learning",
            Domain::DataScience => "Data Science",
        }
    }

    pub fn topics(&self) -> &'static [&'static str] {
        SCOPES
            .iter()
            .find(|scope| scope.domain == *self)
            .map(|scope| scope.topics)
            .unwrap_or(&[])
    }

    /// The scope table in the order it is rendered into instructions.
    pub fn scopes() -> &'static [DomainScope] {
        &SCOPES
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | '-' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "general" => Ok(Domain::General),
            "python" => Ok(Domain::Python),
            "sql" => Ok(Domain::Sql),
            "machine learning" | "ml" => Ok(Domain::MachineLearning),
            "data science" | "ds" => Ok(Domain::DataScience),
            _ => Err(Error::UnknownDomain {
                name: s.to_string(),
            }),
        }
    }
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for Domain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
