use serde::Deserialize;

use crate::db::{quotes::insert_quote_in_tx, Database};
use crate::error::SeedError;

/// A bundled JSON file of quotes that all belong to one category.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub path: &'static str,
    pub category: &'static str,
    pub contents: &'static str,
}

pub const FIXTURES: &[Fixture] = &[
    Fixture {
        path: "data/grit.json",
        category: "grit",
        contents: include_str!("../data/grit.json"),
    },
    Fixture {
        path: "data/gratitude.json",
        category: "gratitude",
        contents: include_str!("../data/gratitude.json"),
    },
    Fixture {
        path: "data/perseverance.json",
        category: "perseverance",
        contents: include_str!("../data/perseverance.json"),
    },
];

/// Category labels the bundled fixtures seed, in import order.
pub fn categories() -> Vec<&'static str> {
    FIXTURES.iter().map(|f| f.category).collect()
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FixtureRecord {
    pub author: String,
    pub message: String,
}

pub fn parse_fixture(source_name: &str, contents: &str) -> Result<Vec<FixtureRecord>, SeedError> {
    let records: Vec<FixtureRecord> =
        serde_json::from_str(contents).map_err(|source| SeedError::Parse {
            source_name: source_name.to_string(),
            source,
        })?;

    if let Some(index) = records
        .iter()
        .position(|r| r.author.trim().is_empty() || r.message.trim().is_empty())
    {
        return Err(SeedError::InvalidRecord {
            source_name: source_name.to_string(),
            index,
        });
    }

    Ok(records)
}

/// Parse `contents` and insert every record tagged with `category`.
///
/// There is no idempotence check: importing the same fixture twice stores
/// every record twice.
pub async fn import_fixture(
    db: &Database,
    source_name: &str,
    contents: &str,
    category: &str,
) -> Result<u64, SeedError> {
    let records = parse_fixture(source_name, contents)?;
    let insert_err = |source| SeedError::Insert {
        source_name: source_name.to_string(),
        source,
    };

    let mut tx = db.pool.begin().await.map_err(insert_err)?;
    for record in &records {
        insert_quote_in_tx(&mut tx, &record.author, &record.message, category)
            .await
            .map_err(insert_err)?;
    }
    tx.commit().await.map_err(insert_err)?;

    let inserted = records.len() as u64;
    tracing::info!(
        "Data from {} inserted successfully under category {} ({} quotes)",
        source_name,
        category,
        inserted
    );
    Ok(inserted)
}

impl Fixture {
    pub async fn import(&self, db: &Database) -> Result<u64, SeedError> {
        import_fixture(db, self.path, self.contents, self.category).await
    }
}

/// Import every bundled fixture. Stops at the first failure.
pub async fn import_all(db: &Database) -> Result<u64, SeedError> {
    let mut total = 0;
    for fixture in FIXTURES {
        tracing::info!("Importing {} data...", fixture.category);
        total += fixture.import(db).await?;
    }
    Ok(total)
}
