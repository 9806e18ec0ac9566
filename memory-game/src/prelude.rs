pub use anyhow::{self, Context, Result};
pub use tracing::{debug, info};

///////////////////////////////////////////////////////////////////////////////
////
//// * workspace
////
///////////////////////////////////////////////////////////////////////////////
pub use common::{DenseTable, SparseTable, TurnIndex};
pub use runner::{parse_string, Reader, Solver};
