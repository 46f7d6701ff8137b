//! Models are the data structures the rest of the core passes around. They
//! are plain values: transactions receive them, change them, and return them
//! wrapped in [Modifications] so the caller can persist the result.
//!
//! [Modifications]: struct.Modifications.html

#[macro_use]
pub mod lib;

load_models!{ pub mod }
load_models!{ pub enum ModelData }

use crate::error::{Error, Result};
use serde::{Serialize, Deserialize};
use std::convert::TryFrom;

/// The kind of change a transaction made to a model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Op {
    Create,
    Update,
    Delete,
}

/// A single change to a single model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Modification {
    op: Op,
    model: ModelData,
}

impl Modification {
    /// Create a new modification
    pub fn new<T: Into<ModelData>>(op: Op, model: T) -> Self {
        Self {
            op,
            model: model.into(),
        }
    }

    /// Consume this modification, returning the op and the wrapped model.
    pub fn into_pair(self) -> (Op, ModelData) {
        (self.op, self.model)
    }

    /// Unwrap the model inside this modification, making sure both the op and
    /// the model type are what we expect.
    pub fn expect_op<T>(self, op: Op) -> Result<T>
        where T: TryFrom<ModelData, Error = Error>
    {
        if self.op != op {
            Err(Error::OpMismatch)?;
        }
        T::try_from(self.model)
    }
}

/// An ordered list of modifications, returned by every transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Modifications {
    modifications: Vec<Modification>,
}

impl Modifications {
    /// Create an empty list
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a list holding one modification
    pub fn new_single<T: Into<ModelData>>(op: Op, model: T) -> Self {
        let mut mods = Self::new();
        mods.push(op, model);
        mods
    }

    /// Add a modification to the end of the list
    pub fn push<T: Into<ModelData>>(&mut self, op: Op, model: T) {
        self.modifications.push(Modification::new(op, model));
    }

    pub fn len(&self) -> usize {
        self.modifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifications.is_empty()
    }

    /// Consume the list into a vec of modifications
    pub fn into_vec(self) -> Vec<Modification> {
        self.modifications
    }
}
