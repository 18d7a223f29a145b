//! Interactive menu
//!
//! A single loop over six menu choices. Each choice runs one flow against
//! the `Library` and returns to the menu; only Exit (or end of input)
//! leaves the loop, closing the library on the way out.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use biblioteca_core::{Library, ReadStatus};

use crate::output::Output;
use crate::prompt::{is_confirmed, non_blank, parse_id, read_answer};

/// A menu entry, as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Update),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What the loop does after a flow finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input ran out mid-flow
    Quit,
}

/// Read an answer or end the current flow when input is exhausted
macro_rules! ask {
    ($shell:expr, $prompt:expr) => {
        match $shell.ask($prompt)? {
            Some(answer) => answer,
            None => return Ok(Flow::Quit),
        }
    };
}

/// The interactive shell, owning the library for its whole lifetime
pub struct Shell<R, W> {
    library: Library,
    input: R,
    output: Output<W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(library: Library, input: R, writer: W) -> Self {
        Self {
            library,
            input,
            output: Output::new(writer),
        }
    }

    /// Run the menu loop until Exit, then close the library
    pub fn run(mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.ask("\nSeleccione una opción: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => {
                    debug!(?choice, "Menu selection");
                    self.dispatch(choice)?
                }
                None => {
                    self.output.message("Opción no válida.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.output.message("¡Hasta luego!")?;
        self.library.close()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_book(),
            MenuChoice::List => self.list_books(),
            MenuChoice::Search => self.search_books(),
            MenuChoice::Update => self.update_book(),
            MenuChoice::Delete => self.delete_book(),
            MenuChoice::Exit => Ok(Flow::Quit),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        self.output.message("\n--- 📚 GESTOR DE BIBLIOTECA PERSONAL ---")?;
        self.output.message("1. Agregar nuevo libro")?;
        self.output.message("2. Ver todos los libros")?;
        self.output.message("3. Buscar libro")?;
        self.output.message("4. Actualizar libro")?;
        self.output.message("5. Eliminar libro")?;
        self.output.message("6. Salir")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output.prompt(prompt)?;
        Ok(read_answer(&mut self.input)?)
    }

    fn add_book(&mut self) -> Result<Flow> {
        self.output.message("\n--- Agregar Libro ---")?;
        let title = ask!(self, "Título: ");
        let author = ask!(self, "Autor: ");
        let genre = non_blank(ask!(self, "Género: "));

        let status = loop {
            let answer = ask!(self, "¿Leído? (s/n): ");
            if let Some(status) = ReadStatus::from_answer(&answer) {
                break status;
            }
            self.output.message("Por favor, ingrese 's' para sí o 'n' para no.")?;
        };

        match self.library.add(&title, &author, genre.as_deref(), status) {
            Ok(_) => self.output.success("¡Libro agregado correctamente!")?,
            Err(e) => self.output.failure(&format!("Error al agregar: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> Result<Flow> {
        self.show_all()?;
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> Result<Flow> {
        let term = ask!(self, "\nIngrese término de búsqueda (título, autor o género): ");
        match self.library.search(&term) {
            Ok(books) => self.output.print_books(&books)?,
            Err(e) => self.output.failure(&format!("Error al buscar: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    fn update_book(&mut self) -> Result<Flow> {
        self.output.message("\n--- Actualizar Libro ---")?;
        self.show_all()?;

        let answer = ask!(self, "Ingrese el ID del libro a modificar: ");
        let Some(id) = parse_id(&answer) else {
            warn!(%answer, "Rejected non-numeric book id");
            self.output.failure("El ID debe ser un número.")?;
            return Ok(Flow::Continue);
        };

        self.output.message("(Deje vacío para mantener el valor actual)")?;
        let title = non_blank(ask!(self, "Nuevo título: "));
        let author = non_blank(ask!(self, "Nuevo autor: "));
        let genre = non_blank(ask!(self, "Nuevo género: "));
        let status = ReadStatus::from_answer(&ask!(
            self,
            "Nuevo estado (s/n, vacío para saltar): "
        ));

        let current = match self.library.get(id) {
            Ok(Some(book)) => book,
            Ok(None) => {
                self.output.failure("ID no encontrado.")?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                self.output.failure(&format!("Error al actualizar: {}", e))?;
                return Ok(Flow::Continue);
            }
        };

        let title = title.unwrap_or(current.title);
        let author = author.unwrap_or(current.author);
        let genre = genre.or(current.genre);
        let status = status.unwrap_or(current.status);

        match self.library.update(id, &title, &author, genre.as_deref(), status) {
            Ok(true) => self.output.success("¡Libro actualizado!")?,
            Ok(false) => self.output.failure("ID no encontrado.")?,
            Err(e) => self.output.failure(&format!("Error al actualizar: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    fn delete_book(&mut self) -> Result<Flow> {
        self.output.message("\n--- Eliminar Libro ---")?;
        self.show_all()?;

        let answer = ask!(self, "Ingrese el ID del libro a eliminar: ");
        let Some(id) = parse_id(&answer) else {
            warn!(%answer, "Rejected non-numeric book id");
            self.output.failure("El ID debe ser un número.")?;
            return Ok(Flow::Continue);
        };

        let confirmation = ask!(
            self,
            &format!("¿Seguro que desea eliminar el libro {}? (s/n): ", id)
        );
        if !is_confirmed(&confirmation) {
            self.output.message("Operación cancelada.")?;
            return Ok(Flow::Continue);
        }

        match self.library.delete(id) {
            Ok(true) => self.output.success("Libro eliminado.")?,
            Ok(false) => self.output.failure("No se encontró ese ID.")?,
            Err(e) => self.output.failure(&format!("Error al eliminar: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    /// Render the whole collection
    fn show_all(&mut self) -> Result<()> {
        match self.library.list_all() {
            Ok(books) => self.output.print_books(&books)?,
            Err(e) => self
                .output
                .failure(&format!("Error al consultar libros: {}", e))?,
        }
        Ok(())
    }
}
