use crate::cli::{Args, Command, OutputFormat};
use crate::config::QueryConfig;
use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use ldquery::{EngineKind, JsonLdLoader};
use std::io::{stdin, stdout, Write};
use std::path::Path;

mod cli;
mod config;
mod render;
mod repl;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let mut stdout = stdout().lock();
    match args.command {
        Command::Load { file_path, engine } => load(&file_path, engine, &mut stdout),
        Command::Query(args) => {
            let config = match QueryConfig::try_from(args) {
                Ok(config) => config,
                Err(e) => {
                    render::write_query_names(&mut stdout)?;
                    return Err(e.into());
                }
            };
            query(&config, &mut stdout)
        }
        Command::Interactive { file_path, engine } => {
            writeln!(stdout, "Loading data with {engine}...")?;
            let loader = open(&file_path, engine)?;
            repl::run(&loader, stdin().lock(), &mut stdout)?;
            Ok(())
        }
        Command::ListQueries => {
            writeln!(stdout, "\nAvailable Example Queries:")?;
            render::write_catalogue(&mut stdout, None)?;
            Ok(())
        }
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn open(file_path: &Path, engine: EngineKind) -> anyhow::Result<JsonLdLoader> {
    let mut loader = JsonLdLoader::new(engine)?;
    loader
        .load(file_path)
        .with_context(|| format!("Error loading file {}", file_path.display()))?;
    Ok(loader)
}

fn load(file_path: &Path, engine: EngineKind, writer: &mut impl Write) -> anyhow::Result<()> {
    writeln!(writer, "\nLoading JSON-LD file with {engine}...")?;
    let loader = open(file_path, engine)?;
    let stats = loader
        .stats()
        .context("Unable to compute the dataset statistics")?;

    writeln!(writer, "Successfully loaded {}\n", file_path.display())?;
    render::write_stats(writer, &stats, loader.namespaces())?;
    Ok(())
}

fn query(config: &QueryConfig, writer: &mut impl Write) -> anyhow::Result<()> {
    let show_progress = config.output == OutputFormat::Table;
    if show_progress {
        writeln!(writer, "Loading data with {}...", config.engine)?;
    }
    let loader = open(&config.file_path, config.engine)?;

    let sparql = config.source.sparql();
    if show_progress {
        writeln!(writer, "\nQuery:\n{}\n", sparql.trim_end())?;
    }
    let results = loader.query(sparql, config.limit).context("Query error")?;

    match config.output {
        OutputFormat::Json => render::write_results_json(writer, &results)?,
        OutputFormat::Table if results.is_empty() => writeln!(writer, "No results found")?,
        OutputFormat::Table => {
            writeln!(writer, "Query Results ({} rows)", results.len())?;
            render::write_results_table(writer, &results, None)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use anyhow::Result;
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::NamedTempFile;
    use predicates::prelude::*;

    const DATA: &str = r#"{
      "@context": {
        "schema": "http://schema.org/",
        "prov": "http://www.w3.org/ns/prov/",
        "ex": "http://example.org/kg/"
      },
      "@graph": [
        { "@id": "ex:doc1", "@type": "prov:Entity", "schema:name": "Annual Report" },
        { "@id": "ex:doc2", "@type": "prov:Entity", "schema:name": "Harbour Survey" },
        { "@id": "ex:doc3", "@type": "prov:Entity", "schema:name": "Field Notes" },
        {
          "@id": "ex:chunk1",
          "@type": "ex:content_chunk",
          "schema:text": "The Newport harbour was expanded in 1901.",
          "ex:heading": "History"
        }
      ]
    }"#;

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command
            .arg("run")
            .arg("--quiet")
            .arg("--bin")
            .arg("ldquery");
        command.arg("--");
        command
    }

    fn data_file() -> Result<NamedTempFile> {
        let file = NamedTempFile::new("knowledge_graph.jsonld")?;
        file.write_str(DATA)?;
        Ok(file)
    }

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("ldquery"));
    }

    #[test]
    fn cli_list_queries() {
        let mut assert = cli_command().arg("list-queries").assert().success();
        for query in ldquery::NamedQuery::ALL {
            assert = assert.stdout(predicate::str::contains(format!("{query}:")));
        }
    }

    #[test]
    fn cli_load() -> Result<()> {
        let file = data_file()?;
        for engine in ["rdflib", "oxigraph"] {
            cli_command()
                .arg("load")
                .arg(file.path())
                .arg("--engine")
                .arg(engine)
                .assert()
                .success()
                .stdout(predicate::str::contains("Total Triples"))
                .stdout(predicate::str::contains("prov:Entity"))
                .stdout(predicate::str::contains("| 9 "));
        }
        Ok(())
    }

    #[test]
    fn cli_load_missing_file() {
        cli_command()
            .arg("load")
            .arg("does/not/exist.jsonld")
            .assert()
            .failure()
            .stderr(predicate::str::contains("File not found"));
    }

    #[test]
    fn cli_query_named_json() -> Result<()> {
        let file = data_file()?;
        for engine in ["rdflib", "oxigraph"] {
            cli_command()
                .arg("query")
                .arg(file.path())
                .arg("--query-name")
                .arg("count_documents")
                .arg("--engine")
                .arg(engine)
                .arg("--output")
                .arg("json")
                .assert()
                .success()
                .stdout("[\n  {\n    \"count\": \"3\"\n  }\n]\n");
        }
        Ok(())
    }

    #[test]
    fn cli_query_custom_with_limit() -> Result<()> {
        let file = data_file()?;
        cli_command()
            .arg("query")
            .arg(file.path())
            .arg("--query")
            .arg("SELECT ?s ?p ?o WHERE { ?s ?p ?o }")
            .arg("--limit")
            .arg("2")
            .assert()
            .success()
            .stdout(predicate::str::contains("Query Results (2 rows)"));
        Ok(())
    }

    #[test]
    fn cli_query_without_query_fails() -> Result<()> {
        let file = data_file()?;
        cli_command()
            .arg("query")
            .arg(file.path())
            .assert()
            .failure()
            .stdout(predicate::str::contains("count_documents"))
            .stderr(predicate::str::contains("--query-name"));
        Ok(())
    }

    #[test]
    fn cli_query_with_both_options_fails() -> Result<()> {
        let file = data_file()?;
        cli_command()
            .arg("query")
            .arg(file.path())
            .arg("--query-name")
            .arg("count_documents")
            .arg("--query")
            .arg("ASK {}")
            .assert()
            .failure();
        Ok(())
    }

    #[test]
    fn cli_query_syntax_error_fails() -> Result<()> {
        let file = data_file()?;
        cli_command()
            .arg("query")
            .arg(file.path())
            .arg("--query")
            .arg("SELECT WHERE {")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid SPARQL query"));
        Ok(())
    }

    #[test]
    fn cli_interactive() -> Result<()> {
        let file = data_file()?;
        cli_command()
            .arg("interactive")
            .arg(file.path())
            .arg("--engine")
            .arg("oxigraph")
            .write_stdin("SELECT (COUNT(*) AS ?n) WHERE { ?s ?p ?o }\nSELECT WHERE {\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("| 9 "))
            .stdout(predicate::str::contains("Error: Invalid SPARQL query"))
            .stdout(predicate::str::contains("Goodbye!"));
        Ok(())
    }

    #[test]
    fn clap_debug() {
        use clap::CommandFactory;

        Args::command().debug_assert()
    }
}
