use crate::render;
use ldquery::JsonLdLoader;
use std::io::{self, BufRead, Write};

/// The number of rows shown for each query.
const MAX_ROWS: usize = 10;

/// Reads queries from `input` line by line and writes their results to `output`.
///
/// `exit` or the end of `input` stops the loop and `help` lists the predefined queries. A failing
/// query is reported and the loop goes on.
pub fn run<R: BufRead, W: Write + ?Sized>(
    loader: &JsonLdLoader,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(
        output,
        "Ready for queries! Type 'help' for examples, 'exit' to quit\n"
    )?;
    loop {
        write!(output, "SPARQL> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let command = line.trim();

        if command.eq_ignore_ascii_case("exit") {
            break;
        }
        if command.eq_ignore_ascii_case("help") {
            render::write_interactive_help(output, loader.namespaces())?;
            continue;
        }
        if command.is_empty() {
            continue;
        }

        match loader.query(command, None) {
            Ok(results) if results.is_empty() => writeln!(output, "No results")?,
            Ok(results) => {
                render::write_results_table(output, &results, Some(MAX_ROWS))?;
                if results.len() > MAX_ROWS {
                    writeln!(
                        output,
                        "Showing first {MAX_ROWS} of {} results",
                        results.len()
                    )?;
                }
            }
            Err(e) => writeln!(output, "Error: {:#}", anyhow::Error::new(e))?,
        }
    }
    writeln!(output, "\nGoodbye!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ldquery::EngineKind;

    fn session(input: &str) -> anyhow::Result<String> {
        let loader = JsonLdLoader::new(EngineKind::Graph)?;
        let mut output = Vec::new();
        run(&loader, input.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn exit_ends_the_session() -> anyhow::Result<()> {
        let output = session("EXIT\nhelp\n")?;
        assert!(output.ends_with("Goodbye!\n"));
        assert!(!output.contains("Available example queries"));
        Ok(())
    }

    #[test]
    fn end_of_input_ends_the_session() -> anyhow::Result<()> {
        let output = session("")?;
        assert!(output.contains("SPARQL> "));
        assert!(output.ends_with("Goodbye!\n"));
        Ok(())
    }

    #[test]
    fn help_lists_the_catalogue() -> anyhow::Result<()> {
        let output = session("help\nexit\n")?;
        assert!(output.contains("count_documents:"));
        assert!(output.contains("semantic_concepts:"));
        Ok(())
    }

    #[test]
    fn errors_do_not_end_the_session() -> anyhow::Result<()> {
        let output = session("SELECT * WHERE { ?s ?p ?o }\n\nSELECT * WHERE { ?s ?p ?o }\nexit\n")?;
        assert_eq!(output.matches("Error: No dataset loaded").count(), 2);
        assert_eq!(output.matches("SPARQL> ").count(), 4);
        Ok(())
    }
}
