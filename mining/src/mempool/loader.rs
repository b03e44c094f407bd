use super::{
    config::Config,
    errors::{LoadError, LoadResult},
};
use crate::model::{TransactionIdSet, store::TransactionStore, tx::Transaction};
use blockbuilder_core::debug;
use csv::{ReaderBuilder, StringRecord};
use std::{fs::File, io::Read, path::Path};

const ID_FIELD: usize = 0;
const FEE_FIELD: usize = 1;
const WEIGHT_FIELD: usize = 2;
const PARENTS_FIELD: usize = 3;
const MIN_FIELDS: usize = 3;

/// Loads the mempool snapshot stored at `path`
pub fn load_mempool(path: impl AsRef<Path>, config: &Config) -> LoadResult<TransactionStore> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open { path: path.display().to_string(), source })?;
    let store = read_mempool(file, config)?;
    debug!(
        "Loaded {} transactions from {} (total weight {}, total fees {})",
        store.len(),
        path.display(),
        store.total_weight(),
        store.total_fees()
    );
    Ok(store)
}

/// Reads a mempool snapshot, keeping the records in arrival order
pub fn read_mempool<R: Read>(reader: R, config: &Config) -> LoadResult<TransactionStore> {
    let mut reader = ReaderBuilder::new().has_headers(false).flexible(true).delimiter(config.field_delimiter).from_reader(reader);

    let mut record = StringRecord::new();
    let mut transactions = Vec::new();
    while reader.read_record(&mut record)? {
        transactions.push(parse_record(&record, config)?);
    }
    Ok(TransactionStore::new(transactions))
}

fn parse_record(record: &StringRecord, config: &Config) -> LoadResult<Transaction> {
    let line = record.position().map_or(0, |position| position.line());
    if record.len() < MIN_FIELDS {
        return Err(LoadError::MissingFields { line, found: record.len() });
    }

    let fee = parse_amount(&record[FEE_FIELD], "fee", line, config)?;
    let weight = parse_amount(&record[WEIGHT_FIELD], "weight", line, config)?;
    let parents: TransactionIdSet = record
        .get(PARENTS_FIELD)
        .filter(|field| !field.is_empty())
        .map(|field| field.split(config.parents_delimiter).map(str::to_owned).collect())
        .unwrap_or_default();

    Ok(Transaction { id: record[ID_FIELD].to_owned(), fee, weight, parents })
}

fn parse_amount(value: &str, field: &'static str, line: u64, config: &Config) -> LoadResult<u64> {
    match value.parse::<u64>() {
        Ok(amount) => Ok(amount),
        Err(_) if config.strict_numeric_fields => Err(LoadError::InvalidNumber { line, field, value: value.to_owned() }),
        Err(err) => {
            debug!("Reading {} '{}' on line {} as 0: {}", field, value, line, err);
            Ok(0)
        }
    }
}
