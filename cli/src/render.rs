use ldquery::namespaces::NamespaceBindings;
use ldquery::{DatasetStats, NamedQuery, QueryResultSet};
use prettytable::{row, Cell, Row, Table};
use std::io::{self, Write};

/// Values longer than this are truncated in tables.
const MAX_CELL_WIDTH: usize = 50;
/// The number of entity types listed by [`write_stats`].
const MAX_TYPES: usize = 10;
/// Longer queries are truncated in the interactive help.
const MAX_HELP_QUERY_LENGTH: usize = 200;

/// Writes the statistics of a loaded dataset as two tables.
pub fn write_stats<W: Write + ?Sized>(
    writer: &mut W,
    stats: &DatasetStats,
    namespaces: &NamespaceBindings,
) -> io::Result<()> {
    writeln!(writer, "Dataset Statistics")?;
    let mut table = Table::new();
    table.set_titles(row!["Metric", "Value"]);
    table.add_row(row!["Total Triples", stats.total_triples]);
    table.add_row(row!["Unique Subjects", stats.distinct.subjects]);
    table.add_row(row!["Unique Predicates", stats.distinct.predicates]);
    table.add_row(row!["Unique Objects", stats.distinct.objects]);
    table.print(writer)?;

    if !stats.types.is_empty() {
        writeln!(writer, "Entity Types")?;
        let mut table = Table::new();
        table.set_titles(row!["Type", "Count"]);
        for type_count in stats.types.iter().take(MAX_TYPES) {
            table.add_row(row![
                namespaces.display_name(&type_count.type_iri),
                type_count.count
            ]);
        }
        table.print(writer)?;
    }
    Ok(())
}

/// Writes query results as a table, one column per projected variable.
///
/// Only the first `max_rows` rows are written if given.
pub fn write_results_table<W: Write + ?Sized>(
    writer: &mut W,
    results: &QueryResultSet,
    max_rows: Option<usize>,
) -> io::Result<()> {
    let mut table = Table::new();
    table.set_titles(Row::new(
        results.variables().iter().map(|v| Cell::new(v)).collect(),
    ));
    for result in results.iter().take(max_rows.unwrap_or(usize::MAX)) {
        let cells = results
            .variables()
            .iter()
            .map(|v| Cell::new(&truncate(result.get(v).unwrap_or_default())))
            .collect();
        table.add_row(Row::new(cells));
    }
    table.print(writer)?;
    Ok(())
}

/// Writes query results as a pretty-printed JSON array of objects.
pub fn write_results_json<W: Write + ?Sized>(
    writer: &mut W,
    results: &QueryResultSet,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, results)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes the name and text of every catalogue query.
///
/// Query texts are truncated to `max_length` characters if given.
pub fn write_catalogue<W: Write + ?Sized>(
    writer: &mut W,
    max_length: Option<usize>,
) -> io::Result<()> {
    for query in NamedQuery::ALL {
        writeln!(writer, "\n{query}:")?;
        let text = query.sparql().trim_end();
        match max_length {
            Some(max_length) if text.chars().count() > max_length => {
                let prefix = text.chars().take(max_length).collect::<String>();
                writeln!(writer, "{prefix}...")?;
            }
            _ => writeln!(writer, "{text}")?,
        }
    }
    Ok(())
}

/// Writes the names of the catalogue queries as a list.
pub fn write_query_names<W: Write + ?Sized>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "\nAvailable queries:")?;
    for query in NamedQuery::ALL {
        writeln!(writer, "  - {query}")?;
    }
    Ok(())
}

/// Writes the help of the interactive mode.
pub fn write_interactive_help<W: Write + ?Sized>(
    writer: &mut W,
    namespaces: &NamespaceBindings,
) -> io::Result<()> {
    writeln!(writer, "\nAvailable example queries:")?;
    write_catalogue(writer, Some(MAX_HELP_QUERY_LENGTH))?;
    writeln!(writer, "\nKnown prefixes:")?;
    write!(writer, "{}", namespaces.sparql_prologue())?;
    writeln!(writer)
}

fn truncate(value: &str) -> String {
    if value.chars().count() > MAX_CELL_WIDTH {
        let prefix = value.chars().take(MAX_CELL_WIDTH - 3).collect::<String>();
        format!("{prefix}...")
    } else {
        value.to_owned()
    }
}
