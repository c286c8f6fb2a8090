// src/parse/mod.rs

//! HTML-table extraction engine.
//!
//! Everything in here is a pure, synchronous transform from raw HTML (or a
//! raw search row) to normalized records. The portal's markup drifts across
//! years; these modules absorb the drift:
//!
//! - `document`: whole-document pre-passes (placeholder sentinel, hidden
//!   comments) and table location
//! - `cell`: localized number formats and decorative markers
//! - `rows`: data / totals / discard row classification
//! - `shapes`: the per-report table-shape parsers
//! - `search`: search-hit assembly with color-coded multi-year cells

pub mod cell;
pub mod document;
pub mod rows;
pub mod search;
pub mod shapes;

pub use shapes::parse_report;

#[cfg(test)]
pub(crate) mod fixtures {
    //! Mock portal responses shared across parser tests.

    pub const SINGLE_TABLE_HTML: &str = r#"
<!DOCTYPE html>
<html>
<body>
<table class="table table-bordered">
    <thead>
        <tr>
            <th>Cinsiyet</th>
            <th>2024</th>
            <th>2023</th>
            <th>2022</th>
        </tr>
    </thead>
    <tbody>
        <tr>
            <td>Erkek</td>
            <td>55</td>
            <td>50</td>
            <td>48</td>
        </tr>
        <tr>
            <td>Kadın</td>
            <td>45</td>
            <td>50</td>
            <td>52</td>
        </tr>
    </tbody>
</table>
</body>
</html>
"#;

    pub const TABLE_WITH_TOTALS_HTML: &str = r#"
<!DOCTYPE html>
<html>
<body>
<table class="table table-bordered">
    <thead>
        <tr>
            <th>Durum</th>
            <th>2024</th>
            <th>2023</th>
        </tr>
    </thead>
    <tbody>
        <tr>
            <td>Yeni Mezun</td>
            <td>60</td>
            <td>55</td>
        </tr>
        <tr>
            <td>Önceki Yıl Mezun</td>
            <td>30</td>
            <td>35</td>
        </tr>
        <tr>
            <td>Diğer</td>
            <td>10</td>
            <td>10</td>
        </tr>
        <tr>
            <td>TOPLAM</td>
            <td>100</td>
            <td>100</td>
        </tr>
    </tbody>
</table>
</body>
</html>
"#;

    pub const MULTI_TABLE_HTML: &str = r#"
<!DOCTYPE html>
<html>
<body>
<table class="table table-bordered">
    <tbody>
        <tr>
            <td>Program Adı</td>
            <td>Bilgisayar Mühendisliği</td>
        </tr>
        <tr>
            <td>Fakülte</td>
            <td>Mühendislik Fakültesi</td>
        </tr>
    </tbody>
</table>

<table class="table table-bordered">
    <tbody>
        <tr>
            <td>Kontenjan</td>
            <td>100</td>
        </tr>
        <tr>
            <td>Yerleşen</td>
            <td>100</td>
        </tr>
    </tbody>
</table>
</body>
</html>
"#;

    pub const EMPTY_TABLE_HTML: &str = r#"
<!DOCTYPE html>
<html>
<body>
<table class="table table-bordered">
    <thead>
        <tr>
            <th>Type</th>
            <th>2024</th>
        </tr>
    </thead>
    <tbody>
    </tbody>
</table>
</body>
</html>
"#;

    pub const PLACEHOLDER_VALUES_HTML: &str = r#"
<!DOCTYPE html>
<html>
<body>
<table class="table table-bordered">
    <thead>
        <tr>
            <th>Type</th>
            <th>2024</th>
            <th>2023</th>
        </tr>
    </thead>
    <tbody>
        <tr>
            <td>Row1</td>
            <td>50</td>
            <td>---</td>
        </tr>
        <tr>
            <td>Row2*</td>
            <td>---</td>
            <td>40</td>
        </tr>
    </tbody>
</table>
</body>
</html>
"#;

    pub const NO_TABLE_HTML: &str = r#"
<!DOCTYPE html>
<html>
<body>
<div class="error">Veri bulunamadı</div>
</body>
</html>
"#;

    /// Score statistics page: both tables are hidden inside HTML comments.
    pub const COMMENTED_SCORE_TABLES_HTML: &str = r#"
<!DOCTYPE html>
<html>
<body>
<!--
<table class="table table-bordered">
    <tr>
        <th>Kontenjan Türü</th>
        <th>Kontenjan</th>
        <th>Yerleşen Sayısı</th>
        <th>0,12 Katsayı ile</th>
    </tr>
    <tr>
        <td>YKS Kontenjanı</td>
        <td>80</td>
        <td>80</td>
        <td>450,2</td>
    </tr>
    <tr>
        <td>Okul Birincisi Kontenjanı</td>
        <td>2</td>
        <td>2</td>
        <td>441,8</td>
    </tr>
    <tr>
        <td>Sınavsız Geçiş Kontenjanı</td>
        <td>5</td>
        <td>5</td>
        <td>---</td>
    </tr>
</table>
-->
<!--
<table class="table table-bordered">
    <tr>
        <th>Kontenjan Türü</th>
        <th>Kontenjan</th>
        <th>Yerleşen Sayısı</th>
        <th>0,12 Katsayı ile</th>
    </tr>
    <tr>
        <td>Genel Kontenjan</td>
        <td>80</td>
        <td>80</td>
        <td>15000</td>
    </tr>
</table>
-->
</body>
</html>
"#;
}
