mod color;
mod export;
mod map;

pub use {
    color::{color_for_time, hex_for_time, to_hex},
    export::export_results,
    map::{MapDocument, MapMarker, MapRegion, render_map},
};
