// src/models/descriptor.rs

//! Report endpoint descriptors.
//!
//! The portal serves ~25 distinct report types for each of the two program
//! tracks. Every report is one HTML page addressed by an opaque endpoint
//! code, and its markup follows one of a handful of table shapes. The whole
//! surface collapses into this one registry; the fetcher is generic over it.

use serde::{Deserialize, Serialize};

/// Program track: two parallel report families with different endpoint codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramTrack {
    /// Bachelor's-level programs ("lisans")
    Bachelor,
    /// Associate-level programs ("önlisans")
    Associate,
}

impl ProgramTrack {
    /// Path segment used in report URLs.
    pub fn path_segment(self) -> &'static str {
        match self {
            ProgramTrack::Bachelor => "lisans",
            ProgramTrack::Associate => "onlisans",
        }
    }
}

/// The structural pattern a report's HTML follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// Header row + N data rows, one record per row. Totals rows are dropped.
    /// Zero tables is an empty result, not an error.
    SingleTable,

    /// Like `SingleTable`, but the totals row is split into a separate
    /// `toplam` map. If several rows carry a totals label, the last one wins.
    TableWithTotals,

    /// Up to N two-column tables in document order, each flattened into a
    /// key-value map under its declared panel name. Panels beyond the
    /// available table count are absent, not errors.
    KeyValuePanels { tables: &'static [&'static str] },

    /// N tables in document order, each parsed as a listing under its own
    /// result key with its own first-column label.
    PairedListings {
        tables: &'static [&'static str],
        labels: &'static [&'static str],
    },

    /// The comment-hidden two-table score statistics report. Requires the
    /// comment-reveal pre-pass and applies its own row relabel/exclusion
    /// filter. Fewer than two tables is an explicit error.
    ScoreStatistics,
}

/// Identifies one report: endpoint code, result key, and how to parse it.
#[derive(Debug, Clone, Copy)]
pub struct EndpointDescriptor {
    pub track: ProgramTrack,
    /// Endpoint code, a path segment like "1010.php"
    pub endpoint: &'static str,
    /// Name under which parsed data is returned
    pub report: &'static str,
    pub shape: TableShape,
    /// Semantic name for the row key column
    pub row_label: &'static str,
}

const fn desc(
    track: ProgramTrack,
    endpoint: &'static str,
    report: &'static str,
    shape: TableShape,
    row_label: &'static str,
) -> EndpointDescriptor {
    EndpointDescriptor {
        track,
        endpoint,
        report,
        shape,
        row_label,
    }
}

use ProgramTrack::{Associate, Bachelor};
use TableShape::{KeyValuePanels, PairedListings, ScoreStatistics, SingleTable, TableWithTotals};

const GENERAL_INFO_PANELS: TableShape = KeyValuePanels {
    tables: &["program_info", "kontenjan_info", "puan_info"],
};

const CITY_REGION_LISTINGS: TableShape = PairedListings {
    tables: &["sehir_dagilimi", "cografi_bolge_dagilimi"],
    labels: &["Tür", "Bölge"],
};

/// All known report endpoints, one row per report type and program track.
pub const DESCRIPTORS: &[EndpointDescriptor] = &[
    // Bachelor's track
    desc(Bachelor, "1000_1.php", "genel_bilgiler", GENERAL_INFO_PANELS, ""),
    desc(Bachelor, "1000_2.php", "kontenjan_yerlesme", SingleTable, "Tür"),
    desc(Bachelor, "1000_3.php", "taban_puan_ve_basari_sirasi_istatistikleri", ScoreStatistics, ""),
    desc(Bachelor, "1010.php", "cinsiyet_dagilimi", SingleTable, "Type"),
    desc(Bachelor, "1020ab.php", "sehir_ve_cografi_bolge_dagilimi", CITY_REGION_LISTINGS, ""),
    desc(Bachelor, "1020c.php", "yerlesen_il_dagilimi", SingleTable, "İl"),
    desc(Bachelor, "1030a.php", "ogrenim_durumu", TableWithTotals, "Öğrenim Durumu"),
    desc(Bachelor, "1030b.php", "mezuniyet_yili_dagilimi", TableWithTotals, "Mezuniyet Yılı"),
    desc(Bachelor, "1030c.php", "okul_birincisi_yerlesen", TableWithTotals, "Yerleşme Türü"),
    desc(Bachelor, "1040.php", "yerlesen_tercih_istatistikleri", SingleTable, "Tercih Sırası"),
    desc(Bachelor, "1050b.php", "lise_alani_dagilimi", SingleTable, "Lise Alanı"),
    desc(Bachelor, "1060.php", "lise_bazinda_yerlesen_dagilimi", TableWithTotals, "Lise"),
    desc(Bachelor, "1070.php", "yerlesen_son_kisi_bilgileri", SingleTable, "Bilgi"),
    desc(Bachelor, "1210a.php", "yerlesen_ortalama_netler", SingleTable, "Ders"),
    desc(Bachelor, "1300.php", "tercih_kullanma_oranlari", SingleTable, "Tercih Sayısı"),
    desc(Bachelor, "1310.php", "tercih_edilen_universite_turleri", KeyValuePanels { tables: &["universite_turleri"] }, ""),
    desc(Bachelor, "1330.php", "tercih_edilen_iller", SingleTable, "İl"),
    desc(Bachelor, "1340a.php", "tercih_edilen_program_turleri", KeyValuePanels { tables: &["program_turleri"] }, ""),
    desc(Bachelor, "2010.php", "kayitli_ogrenci_cinsiyet_dagilimi", SingleTable, "Cinsiyet"),
    desc(Bachelor, "2030.php", "mezuniyet_yili_cinsiyet_dagilimi", SingleTable, "Mezuniyet Yılı"),
    desc(Bachelor, "2040.php", "degisim_programi_bilgileri", SingleTable, "Program"),
    desc(Bachelor, "2050.php", "akademisyen_sayilari", SingleTable, "Unvan"),
    desc(Bachelor, "2060.php", "yatay_gecis_bilgileri", SingleTable, "Transfer Türü"),
    // Associate track
    desc(Associate, "3000_1.php", "genel_bilgiler", GENERAL_INFO_PANELS, ""),
    desc(Associate, "3000_2.php", "kontenjan_yerlesme", SingleTable, "Tür"),
    desc(Associate, "3000_3.php", "taban_puan_ve_basari_sirasi_istatistikleri", ScoreStatistics, ""),
    desc(Associate, "3010.php", "cinsiyet_dagilimi", SingleTable, "Type"),
    desc(Associate, "3020ab.php", "sehir_ve_cografi_bolge_dagilimi", CITY_REGION_LISTINGS, ""),
    desc(Associate, "3020c.php", "yerlesen_il_dagilimi", SingleTable, "İl"),
    desc(Associate, "3030a.php", "ogrenim_durumu", TableWithTotals, "Öğrenim Durumu"),
    desc(Associate, "3030b.php", "mezuniyet_yili_dagilimi", TableWithTotals, "Mezuniyet Yılı"),
    desc(Associate, "3030c.php", "okul_birincisi_yerlesen", TableWithTotals, "Yerleşme Türü"),
    desc(Associate, "3040.php", "yerlesen_tercih_istatistikleri", SingleTable, "Tercih Sırası"),
    desc(Associate, "3050b.php", "lise_alani_dagilimi", SingleTable, "Lise Alanı"),
    desc(Associate, "3060.php", "lise_bazinda_yerlesen_dagilimi", TableWithTotals, "Lise"),
    desc(Associate, "3070.php", "yerlesen_son_kisi_bilgileri", SingleTable, "Bilgi"),
    desc(Associate, "3210a.php", "yerlesen_ortalama_netler", SingleTable, "Ders"),
    desc(Associate, "3300_2.php", "tercih_kullanma_oranlari", SingleTable, "Tercih Sayısı"),
    desc(Associate, "3310b.php", "tercih_edilen_universite_turleri", KeyValuePanels { tables: &["universite_turleri"] }, ""),
    desc(Associate, "3330b.php", "tercih_edilen_iller", SingleTable, "İl"),
    desc(Associate, "3340ab.php", "tercih_edilen_program_turleri", KeyValuePanels { tables: &["program_turleri"] }, ""),
    desc(Associate, "2010.php", "kayitli_ogrenci_cinsiyet_dagilimi", SingleTable, "Cinsiyet"),
    desc(Associate, "2030.php", "mezuniyet_yili_cinsiyet_dagilimi", SingleTable, "Mezuniyet Yılı"),
    desc(Associate, "2040.php", "degisim_programi_bilgileri", SingleTable, "Program"),
    desc(Associate, "2050.php", "akademisyen_sayilari", SingleTable, "Unvan"),
    desc(Associate, "2060.php", "yatay_gecis_bilgileri", SingleTable, "Transfer Türü"),
];

/// Look up the descriptor for a report name within a track.
pub fn descriptor(track: ProgramTrack, report: &str) -> Option<&'static EndpointDescriptor> {
    DESCRIPTORS
        .iter()
        .find(|d| d.track == track && d.report == report)
}

/// All descriptors belonging to one track, in registry order.
pub fn descriptors_for(track: ProgramTrack) -> impl Iterator<Item = &'static EndpointDescriptor> {
    DESCRIPTORS.iter().filter(move |d| d.track == track)
}
