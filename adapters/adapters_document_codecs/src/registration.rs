//! Registration Module
//!
//! Installs the well-known type codecs into a `RegistryBuilder`. Each family
//! can be chosen independently; the primitive codecs they delegate to must be
//! bound as well (see `RegistryBuilder::with_primitives`).

use infrastructure_document_registry::RegistryBuilder;

use crate::duration_codec::register_duration_codec;
use crate::object_id_codec::register_object_id_codec;
use crate::timestamp_codec::register_timestamp_codec;
use crate::wrappers_codec::register_wrappers_codec;

/// Which codec families `register_codecs` installs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecSelection {
    pub wrappers: bool,
    pub duration: bool,
    pub timestamp: bool,
    pub object_id: bool,
}

impl CodecSelection {
    /// Every family
    pub const fn all() -> Self {
        Self {
            wrappers: true,
            duration: true,
            timestamp: true,
            object_id: true,
        }
    }

    /// No family
    pub const fn none() -> Self {
        Self {
            wrappers: false,
            duration: false,
            timestamp: false,
            object_id: false,
        }
    }
}

impl Default for CodecSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Install the selected codec families
pub fn register_codecs(builder: RegistryBuilder, selection: CodecSelection) -> RegistryBuilder {
    let mut builder = builder;
    if selection.wrappers {
        builder = register_wrappers_codec(builder);
    }
    if selection.duration {
        builder = register_duration_codec(builder);
    }
    if selection.timestamp {
        builder = register_timestamp_codec(builder);
    }
    if selection.object_id {
        builder = register_object_id_codec(builder);
    }
    builder
}

/// Install the wrappers, duration, timestamp and object id codecs
pub fn register_all_codecs(builder: RegistryBuilder) -> RegistryBuilder {
    register_codecs(builder, CodecSelection::all())
}
