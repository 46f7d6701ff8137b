//! Transactions are the primary interface for interacting with the rental
//! system. They are responsible for taking the needed information (which must
//! be passed in) and returning a list of modifications that the caller is
//! responsible for applying to whatever storage medium they are using.
//!
//! The high-level picture here is that we're creating a functional API for the
//! models within the system and the interactions between them. The logic all
//! lives in the transactions (and in some cases the models) but storage happens
//! somewhere else and we don't touch it here.
//!
//! Every transaction takes the calling user first and checks their
//! permissions before anything else. Transactions that touch a branch's fleet
//! or bookings then check the caller's [branch scope][scope].
//!
//! [scope]: ../scope/index.html

use crate::{
    error::{Error, Result},
    models::lib::rental_model::Model,
};

pub mod booking;
pub mod branch;
pub mod car;
pub mod maintenance;
pub mod payment;
pub mod pricing_rule;
pub mod reminder;
pub mod user;

/// Error out if a model we depend on is inactive or deleted.
pub(crate) fn require_active<M: Model>(model: &M, tystr: &str) -> Result<()> {
    if !model.is_active() {
        Err(Error::ObjectIsInactive(tystr.into()))?;
    }
    Ok(())
}

/// Error out if the model we're about to change has been deleted.
pub(crate) fn require_not_deleted<M: Model>(model: &M, tystr: &str) -> Result<()> {
    if model.is_deleted() {
        Err(Error::ObjectIsDeleted(tystr.into()))?;
    }
    Ok(())
}
