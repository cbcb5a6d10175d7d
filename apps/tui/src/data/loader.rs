//! Loads the fixed set of processed City Scan tables.
//!
//! All files are fetched concurrently and the load succeeds only as a
//! whole: no chart can render without its dataset, so a single missing or
//! malformed file fails the aggregate (no partial results, no retries).

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::data::records::{
    AgeSexRow, BinRow, CityData, ExposureRow, FloodEvent, FwiWeek, GrowthRatioRow, LandCoverRow,
    PopulationYear, PvMonth, UrbanExtentRow,
};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Flood events are curated by hand per scan rather than exported with the
/// tabular pipeline.
const FLOOD_EVENTS: [FloodEvent; 1] = [FloodEvent {
    begin_year: 1995,
    begin_month: 9,
    displaced: 95_000,
    severity: "Large event",
}];

/// Load every dataset under `dir` (one fan-out per CSV, fan-in on all).
pub async fn load_city_data(dir: impl AsRef<Path>) -> Result<CityData, DataError> {
    let dir = dir.as_ref();

    let (
        pg,
        pas,
        rwi_area,
        uba,
        uba_area,
        lc,
        pug,
        pv,
        pv_area,
        aq_area,
        summer_area,
        ndvi_area,
        fu,
        pu,
        cu,
        comb,
        e,
        s,
        ls_area,
        l_area,
        fwi,
    ) = tokio::try_join!(
        load_csv::<PopulationYear>(dir.join("pg.csv")),
        load_csv::<AgeSexRow>(dir.join("pas.csv")),
        load_csv::<BinRow>(dir.join("rwi_area.csv")),
        load_csv::<UrbanExtentRow>(dir.join("uba.csv")),
        load_csv::<BinRow>(dir.join("uba_area.csv")),
        load_csv::<LandCoverRow>(dir.join("lc.csv")),
        load_csv::<GrowthRatioRow>(dir.join("pug.csv")),
        load_csv::<PvMonth>(dir.join("pv.csv")),
        load_csv::<BinRow>(dir.join("pv_area.csv")),
        load_csv::<BinRow>(dir.join("aq_area.csv")),
        load_csv::<BinRow>(dir.join("summer_area.csv")),
        load_csv::<BinRow>(dir.join("ndvi_area.csv")),
        load_csv::<ExposureRow>(dir.join("fu.csv")),
        load_csv::<ExposureRow>(dir.join("pu.csv")),
        load_csv::<ExposureRow>(dir.join("cu.csv")),
        load_csv::<ExposureRow>(dir.join("comb.csv")),
        load_csv::<BinRow>(dir.join("e.csv")),
        load_csv::<BinRow>(dir.join("s.csv")),
        load_csv::<BinRow>(dir.join("ls_area.csv")),
        load_csv::<BinRow>(dir.join("l_area.csv")),
        load_csv::<FwiWeek>(dir.join("fwi.csv")),
    )?;

    Ok(CityData {
        pg,
        pas,
        rwi_area,
        uba,
        uba_area,
        lc,
        pug,
        pv,
        pv_area,
        aq_area,
        summer_area,
        ndvi_area,
        fu,
        pu,
        cu,
        comb,
        e,
        s,
        ls_area,
        l_area,
        fwi,
        fe: FLOOD_EVENTS.to_vec(),
    })
}

/// Read one CSV into typed rows. Headers are required; fields are trimmed.
async fn load_csv<T: DeserializeOwned>(path: PathBuf) -> Result<Vec<T>, DataError> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| DataError::Io {
            path: path.clone(),
            source,
        })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| DataError::Csv { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(dir: &Path) {
        let files: [(&str, &str); 21] = [
            ("pg.csv", "yearName,population\n2000,480000\n2020,1080000\n"),
            (
                "pas.csv",
                "ageBracket,sex,count,percentage\n0-4,female,10,5\n20-24,male,40,20\n",
            ),
            (
                "rwi_area.csv",
                "bin,count,percentage\nAverage wealth,120,60\nMost wealthy,80,40\n",
            ),
            ("uba.csv", "yearName,uba,percentage\n1985,12.5,41.2\n2015,30.3,100\n"),
            ("uba_area.csv", "bin,count,percentage\nBefore 1986,500,41.2\n"),
            ("lc.csv", "lcType,pixelCount,percentage\nBuilt up,120000,33.3\n"),
            ("pug.csv", "yearName,populationUrbanGrowthRatio\n1990,\n2000,1.4\n"),
            ("pv.csv", "monthName,pv,condition\nJan,4.9,Excellent\n"),
            ("pv_area.csv", "bin,count,percentage\n3.5-4.5,900,90\n"),
            ("aq_area.csv", "bin,count,percentage\n10-15,700,70\n"),
            ("summer_area.csv", "bin,count,percentage\n30-35,550,55\n"),
            ("ndvi_area.csv", "bin,count,percentage\n0.015-0.14,820,82\n"),
            ("fu.csv", "yearName,fu\n1985,0.8\n2015,3.1\n"),
            ("pu.csv", "yearName,pu\n1985,0.2\n2015,1.4\n"),
            ("cu.csv", "yearName,cu\n1985,0.1\n2015,0.6\n"),
            ("comb.csv", "yearName,comb\n1985,1.0\n2015,4.2\n"),
            ("e.csv", "bin,count,percentage\n0-20,400,40\n20-90,600,60\n"),
            ("s.csv", "bin,count,percentage\n0-2,990,99\n"),
            ("ls_area.csv", "bin,count,percentage\nVery low,940,94\n"),
            ("l_area.csv", "bin,count,percentage\nMedium,300,30\n"),
            ("fwi.csv", "week,monthName,fwi,danger\n1,Jan,4.0,Very low\n2,Jan,12.0,Moderate\n"),
        ];

        for (name, contents) in files {
            fs::write(dir.join(name), contents).unwrap();
        }
    }

    #[tokio::test]
    async fn loads_a_complete_fixture_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let data = load_city_data(dir.path()).await.unwrap();
        assert_eq!(data.pg.len(), 2);
        assert_eq!(data.pas[1].age_bracket, "20-24");
        assert!((data.uba[1].uba - 30.3).abs() < f64::EPSILON);
        assert_eq!(data.pug[0].ratio, None);
        assert_eq!(data.pug[1].ratio, Some(1.4));
        assert!((data.comb[1].value - 4.2).abs() < f64::EPSILON);
        assert_eq!(data.fwi[1].danger, "Moderate");
        assert_eq!(data.fe.len(), 1);
    }

    #[tokio::test]
    async fn a_single_missing_file_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        fs::remove_file(dir.path().join("fwi.csv")).unwrap();

        let err = load_city_data(dir.path()).await.unwrap_err();
        assert!(matches!(err, DataError::Io { ref path, .. } if path.ends_with("fwi.csv")));
    }

    #[tokio::test]
    async fn a_malformed_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        fs::write(dir.path().join("pg.csv"), "yearName,population\nnot-a-year,12\n").unwrap();

        let err = load_city_data(dir.path()).await.unwrap_err();
        assert!(matches!(err, DataError::Csv { ref path, .. } if path.ends_with("pg.csv")));
    }

    #[tokio::test]
    async fn end_to_end_ratios_from_fixture() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let data = load_city_data(dir.path()).await.unwrap();
        let ratios = crate::stats::demography::dependency_ratios(&data.pas);
        assert!((ratios.youth_total - 10.0).abs() < f64::EPSILON);
        assert!((ratios.working_age_total - 40.0).abs() < f64::EPSILON);
        assert!(ratios.elderly_total.abs() < f64::EPSILON);
        assert!((ratios.youth_dependency_ratio - 25.0).abs() < f64::EPSILON);
        assert!(ratios.elderly_dependency_ratio.abs() < f64::EPSILON);
    }
}
