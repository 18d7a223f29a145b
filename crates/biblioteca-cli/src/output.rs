//! Output formatting for the interactive menu
//!
//! Everything the shell shows goes through `Output`, so a session can be
//! rendered to stdout or captured in a buffer.

use std::io::{self, Write};

use biblioteca_core::Book;

/// Width of the separator rules around the book table
const RULE_WIDTH: usize = 85;

/// Message shown instead of an empty table
pub const NO_BOOKS: &str = "(No se encontraron libros)";

/// Output helper wrapping the terminal writer
pub struct Output<W> {
    writer: W,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Print a prompt without a trailing newline
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    /// Print an informational message
    pub fn message(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", msg)
    }

    /// Print a success message
    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.writer, "✓ {}", msg)
    }

    /// Print a failure message
    pub fn failure(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.writer, "✗ {}", msg)
    }

    /// Print books as a fixed-width table
    pub fn print_books(&mut self, books: &[Book]) -> io::Result<()> {
        if books.is_empty() {
            return writeln!(self.writer, "\n{}", NO_BOOKS);
        }

        writeln!(self.writer, "\n{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            self.writer,
            "{}",
            table_row("ID", "TÍTULO", "AUTOR", "GÉNERO", "ESTADO")
        )?;
        writeln!(self.writer, "{}", "-".repeat(RULE_WIDTH))?;
        for book in books {
            writeln!(
                self.writer,
                "{}",
                table_row(
                    &book.id.to_string(),
                    &book.title,
                    &book.author,
                    book.genre.as_deref().unwrap_or(""),
                    book.status.as_str(),
                )
            )?;
        }
        writeln!(self.writer, "{}\n", "=".repeat(RULE_WIDTH))
    }
}

/// Format one table line; cells are padded by character count, never truncated
fn table_row(id: &str, title: &str, author: &str, genre: &str, status: &str) -> String {
    format!(
        "{:<5} | {:<25} | {:<20} | {:<15} | {:<10}",
        id, title, author, genre, status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblioteca_core::ReadStatus;

    fn render(books: &[Book]) -> String {
        let mut buf = Vec::new();
        Output::new(&mut buf).print_books(books).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn dune() -> Book {
        Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: Some("Sci-Fi".to_string()),
            status: ReadStatus::Unread,
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(render(&[]), "\n(No se encontraron libros)\n");
    }

    #[test]
    fn test_table_layout() {
        let rendered = render(&[dune()]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(85));
        assert!(lines[2].starts_with("ID    | TÍTULO "));
        assert_eq!(lines[3], "-".repeat(85));
        assert!(lines[4].starts_with("1     | Dune                      | Frank Herbert        |"));
        assert!(lines[4].contains("| Sci-Fi          | No leído"));
        assert_eq!(lines[5], "=".repeat(85));
        assert!(rendered.ends_with("\n\n"));
    }

    #[test]
    fn test_columns_padded_by_characters() {
        let rendered = render(&[dune()]);
        let lines: Vec<&str> = rendered.lines().collect();

        // 5 + 25 + 20 + 15 + 10 plus four " | " separators
        assert_eq!(lines[2].chars().count(), 87);
        assert_eq!(lines[4].chars().count(), 87);
    }

    #[test]
    fn test_missing_genre_renders_empty_cell() {
        let mut book = dune();
        book.genre = None;

        let rendered = render(&[book]);
        assert!(rendered.contains("| Frank Herbert        |                 | No leído"));
    }

    #[test]
    fn test_long_values_are_not_truncated() {
        let mut book = dune();
        book.title = "A".repeat(40);

        let rendered = render(&[book]);
        assert!(rendered.contains(&"A".repeat(40)));
    }

    #[test]
    fn test_messages() {
        let mut buf = Vec::new();
        {
            let mut output = Output::new(&mut buf);
            output.success("Libro eliminado.").unwrap();
            output.failure("No se encontró ese ID.").unwrap();
            output.prompt("Título: ").unwrap();
        }
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "✓ Libro eliminado.\n✗ No se encontró ese ID.\nTítulo: "
        );
    }
}
