//! twin match - element similarity core
//!
//! Finds elements in a changed document that are similar to a target
//! element from the original document. Candidates come from exactly one
//! tier of a priority cascade; explicitly hidden candidates are dropped
//! afterwards.
//!
//! An element is similar when one of the following holds, checked in this
//! order with the first non-empty tier winning outright:
//!
//! - its id exactly matches the target's id
//! - it is a link whose text contains the target's text
//! - it is a link whose class string exactly matches the target's
//! - it is a link whose title exactly matches the target's
//!
//! The core is pure: documents and node ids in, node ids and strings out.
//! Reporting belongs to the caller.

mod describe;
mod filter;
mod resolver;

pub use describe::{describe_element, element_path};
pub use filter::{filter_hidden, is_shown};
pub use resolver::{Resolution, Tier, similar_elements};
