//! Cluster actions - one file per action.
//!
//! Each action defines its request and response shapes, a typed `execute`
//! against the registry, and a `handle` entry point that applies the
//! tolerant parameter decode before invoking it. Decode failures never
//! reach the registry; they come back as `ParamsError` responses.

mod create;
mod delete;
mod list;
mod read;
mod update;

pub use create::{CreateAction, CreateParams, CreateResponse};
pub use delete::{DeleteAction, DeleteParams, DeleteResponse};
pub use list::{ListAction, ListParams, ListResponse};
pub use read::{ReadAction, ReadParams, ReadResponse};
pub use update::{UpdateAction, UpdateParams, UpdateResponse};
