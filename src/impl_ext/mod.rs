// Crate-internal.
// ---

pub(crate) mod standard_tables {
    pub(crate) mod calendar_colors;
    pub(crate) mod service_flags;
    pub(crate) mod sync_defaults;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod standard_tables {
        pub use crate::impl_ext::standard_tables::calendar_colors::*;
        pub use crate::impl_ext::standard_tables::service_flags::*;
        pub use crate::impl_ext::standard_tables::sync_defaults::*;
    }
}
