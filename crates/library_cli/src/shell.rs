//! Interactive menu loop over the catalog.
//!
//! # Responsibility
//! - Read menu choices and field prompts from an input stream.
//! - Print one human-readable outcome per operation.
//!
//! # Invariants
//! - The catalog is closed on every normal exit path (menu exit or EOF).
//! - Non-numeric ids and years are re-prompted, never fatal.
//! - Store failures end the loop and propagate to the caller.

use library_core::{
    Book, BookId, BookRepository, CatalogService, RemoveOutcome, RepoError, StatusUpdateOutcome,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "\nMenu:
1. Add a book
2. Remove a book
3. Search books
4. List all books
5. Update book status
6. Exit";

/// Fatal shell failure.
#[derive(Debug)]
pub enum ShellError {
    Io(io::Error),
    Repo(RepoError),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
            Self::Repo(err) => write!(f, "catalog store failed: {err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for ShellError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

type ShellResult<T> = Result<T, ShellError>;

enum Flow {
    Continue,
    Exit,
}

/// Runs the menu until the user exits or input ends, then closes the catalog.
pub fn run<R, I, O>(catalog: CatalogService<R>, input: I, output: O) -> ShellResult<()>
where
    R: BookRepository,
    I: BufRead,
    O: Write,
{
    let mut shell = Shell { input, output };

    loop {
        writeln!(shell.output, "{MENU}")?;
        let Some(choice) = shell.prompt("Choose an action: ")? else {
            break;
        };

        let flow = match choice.trim() {
            "1" => shell.add(&catalog)?,
            "2" => shell.remove(&catalog)?,
            "3" => shell.search(&catalog)?,
            "4" => shell.list(&catalog)?,
            "5" => shell.update_status(&catalog)?,
            "6" => Flow::Exit,
            _ => {
                writeln!(shell.output, "Invalid choice, try again.")?;
                Flow::Continue
            }
        };

        if let Flow::Exit = flow {
            break;
        }
    }

    catalog.close()?;
    writeln!(shell.output, "Goodbye.")?;
    shell.output.flush()?;
    info!("event=shell_exit module=cli status=ok");
    Ok(())
}

struct Shell<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Shell<I, O> {
    fn add<R: BookRepository>(&mut self, catalog: &CatalogService<R>) -> ShellResult<Flow> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt_number::<i32>("Publication year: ")? else {
            return Ok(Flow::Exit);
        };

        match catalog.add(&title, &author, year) {
            Ok(id) => writeln!(self.output, "Book added (id {id}).")?,
            Err(RepoError::Validation(err)) => writeln!(self.output, "Book not added: {err}.")?,
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    fn remove<R: BookRepository>(&mut self, catalog: &CatalogService<R>) -> ShellResult<Flow> {
        let Some(id) = self.prompt_number::<BookId>("Book id to remove: ")? else {
            return Ok(Flow::Exit);
        };

        match catalog.remove(id)? {
            RemoveOutcome::Removed => writeln!(self.output, "Book removed.")?,
            RemoveOutcome::NotFound => writeln!(self.output, "No book with that id.")?,
        }
        Ok(Flow::Continue)
    }

    fn search<R: BookRepository>(&mut self, catalog: &CatalogService<R>) -> ShellResult<Flow> {
        let Some(keyword) = self.prompt("Search keyword: ")? else {
            return Ok(Flow::Exit);
        };

        let books = catalog.search(&keyword)?;
        if books.is_empty() {
            writeln!(self.output, "No books found.")?;
        } else {
            self.print_books(&books)?;
        }
        Ok(Flow::Continue)
    }

    fn list<R: BookRepository>(&mut self, catalog: &CatalogService<R>) -> ShellResult<Flow> {
        let books = catalog.list()?;
        if books.is_empty() {
            writeln!(self.output, "The library is empty.")?;
        } else {
            self.print_books(&books)?;
        }
        Ok(Flow::Continue)
    }

    fn update_status<R: BookRepository>(
        &mut self,
        catalog: &CatalogService<R>,
    ) -> ShellResult<Flow> {
        let Some(id) = self.prompt_number::<BookId>("Book id to update: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(status) = self.prompt("New status ('available' or 'checked_out'): ")? else {
            return Ok(Flow::Exit);
        };

        match catalog.update_status(id, &status)? {
            StatusUpdateOutcome::Updated => writeln!(self.output, "Book status updated.")?,
            StatusUpdateOutcome::NotFound => writeln!(self.output, "No book with that id.")?,
            StatusUpdateOutcome::InvalidStatus(raw) => writeln!(
                self.output,
                "Invalid status: `{}`. Use 'available' or 'checked_out'.",
                raw.trim()
            )?,
        }
        Ok(Flow::Continue)
    }

    fn print_books(&mut self, books: &[Book]) -> ShellResult<()> {
        for book in books {
            writeln!(self.output, "{book}")?;
        }
        Ok(())
    }

    /// Prints `label` and reads one line without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Re-prompts until the line parses as `T`. Returns `None` at end of input.
    fn prompt_number<T: FromStr>(&mut self, label: &str) -> ShellResult<Option<T>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }
}
