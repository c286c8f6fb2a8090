// src/utils/url.rs

//! Report and search URL construction.
//!
//! The portal versions report pages by year in the URL path, except for one
//! "current" year whose pages live at the unversioned path. That quirk is
//! configuration (`portal.unversioned_year`), not a hardcoded constant.

use crate::models::{EndpointDescriptor, PortalConfig, ProgramTrack};

/// Build the URL for one report page.
pub fn report_url(
    portal: &PortalConfig,
    desc: &EndpointDescriptor,
    program_id: &str,
    year: u16,
) -> String {
    let base = portal.base_url.trim_end_matches('/');
    let segment = format!("{}-dynamic", desc.track.path_segment());

    if year == portal.unversioned_year {
        format!("{base}/content/{segment}/{}?y={program_id}", desc.endpoint)
    } else {
        format!(
            "{base}/{year}/content/{segment}/{}?y={program_id}",
            desc.endpoint
        )
    }
}

/// Build the URL of a track's tabular search endpoint.
pub fn search_url(portal: &PortalConfig, track: ProgramTrack) -> String {
    let base = portal.base_url.trim_end_matches('/');
    let endpoint = match track {
        ProgramTrack::Bachelor => "server_processing-atlas2016-TS-t4.php",
        ProgramTrack::Associate => "server_processing-atlas2016-MTS-t4.php",
    };
    format!("{base}/server_side/{endpoint}")
}
