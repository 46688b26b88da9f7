//! Two-way value bindings shared between UI components.
//!
//! A [`State`] owns a value; any number of [`Binding`]s read and write the
//! same cell. Everything runs on the UI thread, so the cell is an
//! `Rc<Cell<T>>` rather than a lock.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Owner of a bindable value.
pub struct State<T: Copy> {
    cell: Rc<Cell<T>>,
}

impl<T: Copy> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(Cell::new(value)),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.cell.get()
    }

    /// Overwrite the value.
    pub fn set(&self, value: T) {
        self.cell.set(value);
    }

    /// Hand out a read/write view onto this state.
    pub fn binding(&self) -> Binding<T> {
        Binding {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Copy + Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&self.cell.get()).finish()
    }
}

/// Read/write handle onto a [`State`] owned elsewhere.
#[derive(Clone)]
pub struct Binding<T: Copy> {
    cell: Rc<Cell<T>>,
}

impl<T: Copy> Binding<T> {
    pub fn get(&self) -> T {
        self.cell.get()
    }

    pub fn set(&self, value: T) {
        self.cell.set(value);
    }

    /// Store `value` and return the previous one.
    pub fn replace(&self, value: T) -> T {
        self.cell.replace(value)
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.cell.get()).finish()
    }
}
