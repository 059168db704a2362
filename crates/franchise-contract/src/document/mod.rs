//! Contract rendering and export.

mod export;
mod render;
mod template;

pub use export::{
    artifact_filename, prepare, ArtifactSink, ContractExporter, DirectorySink, ExportArtifact,
    ExportError, PreparedExport, SinkError,
};
pub use render::{render, ContractDocument, Page};
