use crate::analyser::logic::*;
use anyhow::Result;
use std::io::Write as _;

const POSTS_CSV: &str = "page_id,message,likes\n\
p1,\"hello, world\",10\n\
p2,,20\n\
p1,\"said \"\"hi\"\"\",\n";

fn write_temp(content: &str) -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_csv_from_reader() -> Result<()> {
    let table = CsvLoader::new().load_from_reader(POSTS_CSV.as_bytes())?;

    assert_eq!(table.columns(), ["page_id", "message", "likes"]);
    assert_eq!(table.row_count(), 3);
    let messages: Vec<&str> = table.column_values(1).collect();
    assert_eq!(messages, vec!["hello, world", "", "said \"hi\""]);
    Ok(())
}

#[test]
fn test_csv_ragged_rows() -> Result<()> {
    let table = CsvLoader::new().load_from_reader("a,b,c\n1,2\n3,4,5,6\n".as_bytes())?;

    assert_eq!(table.rows(), [vec!["1", "2", ""], vec!["3", "4", "5"]]);
    Ok(())
}

#[test]
fn test_csv_custom_delimiter() -> Result<()> {
    let table = CsvLoader::new()
        .delimiter(b';')
        .load_from_reader("a;b\n1;x\n".as_bytes())?;
    assert_eq!(table.columns(), ["a", "b"]);
    assert_eq!(table.rows(), [vec!["1", "x"]]);
    Ok(())
}

#[test]
fn test_csv_header_only() -> Result<()> {
    let table = CsvLoader::new().load_from_reader("a,b\n".as_bytes())?;
    assert_eq!(table.column_count(), 2);
    assert!(table.is_empty());
    assert!(compute_stats(&table).is_empty());
    Ok(())
}

#[test]
fn test_csv_loader_reads_file() -> Result<()> {
    let file = write_temp(POSTS_CSV)?;
    let table = CsvLoader::new().load(file.path())?;
    assert_eq!(table.row_count(), 3);
    Ok(())
}

#[test]
fn test_polars_loader_matches_csv_loader() -> Result<()> {
    let file = write_temp(POSTS_CSV)?;

    let from_csv = LoaderKind::Csv.loader().load(file.path())?;
    let from_polars = LoaderKind::Polars.loader().load(file.path())?;

    assert_eq!(from_csv, from_polars);
    assert_eq!(compute_stats(&from_csv), compute_stats(&from_polars));
    Ok(())
}

#[test]
fn test_polars_loader_keeps_numbers_as_written() -> Result<()> {
    let file = write_temp("id,score\n007,1.50\n010,2\n")?;
    let table = PolarsLoader::new().load(file.path())?;

    let ids: Vec<&str> = table.column_values(0).collect();
    assert_eq!(ids, vec!["007", "010"]);
    let scores: Vec<&str> = table.column_values(1).collect();
    assert_eq!(scores, vec!["1.50", "2"]);
    Ok(())
}
