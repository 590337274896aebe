//! Testing utilities for transducer chains.
//!
//! - **Assertions**: compare driver outputs with expected results
//! - **Spies**: count how many elements reach a point in a chain
//! - **Debug stages**: log elements flowing past a point in a chain
//! - **Fixtures**: small datasets shared by the test suite
//!
//! # Quick Start
//!
//! ```
//! use ironfold::*;
//! use ironfold::testing::*;
//!
//! let before = Spy::new();
//! let after = Spy::new();
//! let xf = compose!(before.stage(), take_until(|n: &i32| *n != 4), after.stage());
//!
//! let out = seq(&xf, digits());
//! assert_collections_equal(&out, &[0, 1, 2, 3]);
//! assert_eq!(before.count(), 5);
//! assert_eq!(after.count(), 4);
//! ```

pub mod assertions;
pub mod debug;
pub mod fixtures;
pub mod spy;

pub use assertions::*;
pub use debug::*;
pub use fixtures::*;
pub use spy::*;
