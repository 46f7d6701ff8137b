use chrono::{DateTime, Utc};

/// A trait that every model built with `rental_model!` implements. It lets
/// generic code (modification lists, test helpers) talk about the shared
/// envelope without knowing the concrete model.
pub trait Model: Clone + std::fmt::Debug + PartialEq {
    /// Whether the model is active and not deleted
    fn is_active(&self) -> bool;

    /// Whether the model has been soft-deleted
    fn is_deleted(&self) -> bool;

    /// Set (or clear) the deleted timestamp
    fn set_deleted(&mut self, deleted: Option<DateTime<Utc>>);

    /// Set the active flag
    fn set_active(&mut self, active: bool);
}

/// Defines a model along with its ID type and builder. Every model gets the
/// same envelope: `id`, `active`, `created`, `updated`, and an optional
/// `deleted` timestamp (deletes are soft).
///
/// ```ignore
/// rental_model! {
///     pub struct Branch {
///         id: <<BranchID>>,
///         name: String,
///     }
///     BranchBuilder
/// }
/// ```
macro_rules! rental_model {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            id: <<$id:ident>>,
            $($fields:tt)*
        }
        $builder:ident
    ) => {
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $id(String);

        impl $id {
            pub fn new<T: Into<String>>(id: T) -> Self {
                Self(id.into())
            }

            /// Create a fresh random ID. Hosts assign their own IDs, so this is
            /// only used in tests.
            #[cfg(test)]
            pub fn create() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Return a string ref for this ID
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::convert::From<$id> for String {
            fn from(id: $id) -> Self {
                let $id(val) = id;
                val
            }
        }

        impl std::convert::From<String> for $id {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::convert::From<&str> for $id {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        $(#[$struct_meta])*
        #[derive(Clone, Debug, PartialEq, getset::Getters, getset::Setters, derive_builder::Builder, serde::Serialize, serde::Deserialize)]
        #[builder(pattern = "owned", setter(into))]
        #[getset(get = "pub", set = "pub")]
        pub struct $name {
            id: $id,
            $($fields)*
            #[builder(default)]
            active: bool,
            created: chrono::DateTime<chrono::Utc>,
            updated: chrono::DateTime<chrono::Utc>,
            #[builder(setter(strip_option), default)]
            #[serde(skip_serializing_if = "Option::is_none", default)]
            deleted: Option<chrono::DateTime<chrono::Utc>>,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }

            pub fn is_active(&self) -> bool {
                self.active && !self.is_deleted()
            }

            pub fn is_deleted(&self) -> bool {
                self.deleted.is_some()
            }
        }

        impl crate::models::lib::rental_model::Model for $name {
            fn is_active(&self) -> bool {
                self.active && self.deleted.is_none()
            }

            fn is_deleted(&self) -> bool {
                self.deleted.is_some()
            }

            fn set_deleted(&mut self, deleted: Option<chrono::DateTime<chrono::Utc>>) {
                self.deleted = deleted;
            }

            fn set_active(&mut self, active: bool) {
                self.active = active;
            }
        }
    }
}
