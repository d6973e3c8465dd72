// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rewrite the confirmation and notification blocks of Gravity Forms JSON
//! exports with fixed templates, keeping the original ids.

pub mod converter;
pub mod error;
pub mod templates;
pub mod transform;

pub use converter::{json_files, BatchSummary, ConsoleReporter, FormConverter, Reporter};
pub use error::ConvertError;
pub use transform::{convert_document, Conversion, Warning};
