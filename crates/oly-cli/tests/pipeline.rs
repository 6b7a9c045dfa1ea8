//! End-to-end tests for the cleaning pipeline.

use std::fs;
use std::path::Path;

use oly_cli::pipeline::{ingest, load_lookups, run_pipeline, tally};
use oly_ingest::read_csv_table;
use oly_model::{PipelineOptions, SourceTable};

const BIO: &str = "\
athlete_id,name,sex,born,country_noc
1,Jean-François Blanchy,Male,12 December 1886,FRA
2,Arnaud Boetsch,Male,1 April 1969,FRA
3,Mystery,Female,,
4,Year Only,Male,1879,GRE
";

const EVENTS: &str = "\
edition,edition_id,country_noc,sport,event,athlete,athlete_id,pos,medal
1912 Summer Olympics,6,FRA,Tennis,Singles,Jean-François Blanchy,1,DNS,
1996 Summer Olympics,24,FRA,Tennis,Singles,Arnaud Boetsch,2,5,
1996 Summer Olympics,24,FRA,Tennis,Doubles,Arnaud Boetsch,2,3,Bronze
1996 Summer Olympics,24,XYZ,Tennis,Doubles,Mystery,3,1,Gold
1896 Summer Olympics,1,GRE,Athletics,Marathon,Year Only,4,7,
";

const GAMES: &str = "\
edition,edition_id,year,city,competition_date
1896 Summer Olympics,1,1896,Athina,6 – 15 April
1912 Summer Olympics,6,1912,Stockholm,5 May – 27 July
1996 Summer Olympics,24,1996,Atlanta,19 July – 4 August
";

const COUNTRIES: &str = "\
noc,country
FRA,France
GRE,Greece
SWE,Sweden
USA,United States
";

fn write_sources(dir: &Path) {
    fs::write(dir.join("olympic_athlete_bio.csv"), BIO).expect("write bio");
    fs::write(dir.join("olympic_athlete_event_results.csv"), EVENTS).expect("write events");
    fs::write(dir.join("olympics_games.csv"), GAMES).expect("write games");
    fs::write(dir.join("olympics_country.csv"), COUNTRIES).expect("write countries");
}

fn column(path: &Path, name: &str) -> Vec<String> {
    let table = read_csv_table(path).expect("read output");
    let idx = table.column_index(name).expect("column present");
    table.rows.iter().map(|row| row[idx].clone()).collect()
}

#[test]
fn full_run_writes_all_outputs() {
    let data = tempfile::tempdir().expect("create data dir");
    let out = tempfile::tempdir().expect("create output dir");
    write_sources(data.path());
    let options = PipelineOptions::new(data.path()).with_output_dir(out.path());

    let summary = run_pipeline(&options).expect("run pipeline");
    assert!(!summary.has_errors(), "{:?}", summary.errors);
    assert_eq!(summary.passes.len(), 4);
    assert_eq!(summary.tally_rows, 3);

    assert_eq!(
        column(&options.output_path(SourceTable::AthleteBio), "born"),
        vec!["12-Dec-1886", "01-Apr-1969", "", "01-Jan-1879"]
    );
    assert_eq!(
        column(&options.output_path(SourceTable::Games), "competition_date"),
        vec![
            "06-Apr-1896 to 15-Apr-1896",
            "05-May-1912 to 27-Jul-1912",
            "19-Jul-1996 to 04-Aug-1996",
        ]
    );
    assert_eq!(
        column(&options.output_path(SourceTable::EventResults), "age"),
        vec!["25", "27", "27", "N/A", "N/A"]
    );
    assert_eq!(
        fs::read_to_string(options.output_path(SourceTable::Countries)).expect("read countries"),
        COUNTRIES
    );

    let tally = fs::read_to_string(options.tally_path()).expect("read tally");
    insta::assert_snapshot!(tally.trim_end(), @r"
    edition,edition_id,Country,NOC,number_of_athletes,gold_medal_count,silver_medal_count,bronze_medal_count,total_medals
    1896 Summer Olympics,1,Greece,GRE,1,0,0,0,0
    1912 Summer Olympics,6,France,FRA,1,0,0,0,0
    1996 Summer Olympics,24,France,FRA,2,1,0,1,2
    ");
}

#[test]
fn pass_statistics() {
    let data = tempfile::tempdir().expect("create data dir");
    write_sources(data.path());
    let options = PipelineOptions::new(data.path()).with_dry_run(true);

    let summary = run_pipeline(&options).expect("run pipeline");
    let stats: Vec<_> = summary
        .passes
        .iter()
        .map(|pass| (pass.table.as_str(), &pass.stats))
        .collect();
    insta::assert_json_snapshot!(stats, @r#"
    [
      [
        "athlete bio",
        {
          "rows": 4,
          "normalized": 3,
          "failures": {
            "missing value": 1
          }
        }
      ],
      [
        "event results",
        {
          "rows": 5,
          "normalized": 3,
          "failures": {
            "birth month unknown": 2
          }
        }
      ],
      [
        "countries",
        {
          "rows": 4,
          "normalized": 0,
          "failures": {}
        }
      ],
      [
        "games",
        {
          "rows": 3,
          "normalized": 3,
          "failures": {}
        }
      ]
    ]
    "#);
}

#[test]
fn dry_run_leaves_output_dir_untouched() {
    let data = tempfile::tempdir().expect("create data dir");
    write_sources(data.path());
    let options = PipelineOptions::new(data.path()).with_dry_run(true);

    let summary = run_pipeline(&options).expect("run pipeline");
    assert!(summary.passes.iter().all(|pass| pass.output.is_none()));
    assert!(summary.tally_output.is_none());
    assert!(!options.tally_path().exists());
    assert!(!options.output_path(SourceTable::AthleteBio).exists());
}

#[test]
fn missing_source_stops_the_run() {
    let data = tempfile::tempdir().expect("create data dir");
    write_sources(data.path());
    fs::remove_file(data.path().join("olympics_games.csv")).expect("remove games");

    let error = run_pipeline(&PipelineOptions::new(data.path())).unwrap_err();
    assert_eq!(error.to_string(), "locate games table");
}

#[test]
fn missing_column_fails_only_its_pass() {
    let data = tempfile::tempdir().expect("create data dir");
    write_sources(data.path());
    fs::write(
        data.path().join("olympics_games.csv"),
        "edition,edition_id,year,competition_date\n1896 Summer Olympics,1,1896,6 – 15 April\n",
    )
    .expect("rewrite games");
    fs::write(
        data.path().join("olympic_athlete_bio.csv"),
        "athlete_id,name,born\n1,A,12 December 1886\n",
    )
    .expect("rewrite bio");
    fs::write(
        data.path().join("olympic_athlete_event_results.csv"),
        "edition,athlete_id\n1896 Summer Olympics,1\n",
    )
    .expect("rewrite events");

    let summary = run_pipeline(&PipelineOptions::new(data.path()).with_dry_run(true))
        .expect("run pipeline");
    assert_eq!(summary.passes.len(), 4);
    assert_eq!(summary.errors.len(), 1);
    assert!(summary.errors[0].starts_with("medal tally: required column 'edition_id'"));
}

#[test]
fn stages_run_in_order() {
    let data = tempfile::tempdir().expect("create data dir");
    write_sources(data.path());
    let options = PipelineOptions::new(data.path()).with_dry_run(true);

    let sources = ingest(&options).expect("ingest");
    let lookups = load_lookups(&sources).expect("build lookups");
    assert_eq!(lookups.games.len(), 3);
    assert_eq!(lookups.athletes.len(), 4);
    assert_eq!(lookups.countries.len(), 4);

    let outcome = tally(&sources, &lookups, &options).expect("tally");
    assert_eq!(outcome.rows, 3);
    assert!(outcome.output.is_none());
}
