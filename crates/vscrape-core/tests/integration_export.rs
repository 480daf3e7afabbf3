//! Integration test: collect scraped venues, name the output after the site,
//! export to CSV, and read the file back.

use vscrape_core::collector::VenueCollector;
use vscrape_core::config::ScrapeConfig;
use vscrape_core::csv_export::{save_venues_to_csv, SaveOutcome};
use vscrape_core::record::{load_records, Record, Venue};
use vscrape_core::schema::RecordSchema;
use vscrape_core::url_model::generate_csv_filename;
use tempfile::tempdir;

#[test]
fn scraped_venues_round_trip_through_csv() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("venues.jsonl");
    std::fs::write(
        &input,
        concat!(
            "{\"name\": \"The Barn, Atlanta\", \"location\": \"Atlanta, GA\", \"rating\": 4.9}\n",
            "{\"name\": \"Rooftop \\\"Loft\\\"\", \"description\": \"city views\\nopen bar\"}\n",
            "{\"name\": \"The Barn, Atlanta\", \"location\": \"Duplicate\"}\n",
            "{\"location\": \"no name\"}\n",
        ),
    )
    .unwrap();

    let cfg = ScrapeConfig::default();
    let mut collector = VenueCollector::new(cfg.required_fields.iter().cloned());
    collector.extend(load_records(&input).unwrap());
    let stats = collector.stats();
    assert_eq!(stats.accepted, 2);
    assert_eq!(stats.duplicates, 1);
    assert_eq!(stats.incomplete, 1);

    let filename = generate_csv_filename(
        "https://www.theknot.com/marketplace/wedding-reception-venues-atlanta-ga",
        Some("run1"),
    );
    assert_eq!(filename, "run1_theknot_scraped.csv");
    let out = dir.path().join(&filename);

    let venues = collector.into_records();
    let outcome = save_venues_to_csv(&venues, &cfg.schema(), &out).unwrap();
    assert_eq!(
        outcome,
        SaveOutcome::Saved {
            count: 2,
            path: out.clone()
        }
    );

    let mut reader = csv::Reader::from_path(&out).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, Venue::FIELDS);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "The Barn, Atlanta");
    assert_eq!(&rows[0][1], "Atlanta, GA");
    assert_eq!(&rows[0][4], "4.9");
    assert_eq!(&rows[1][0], "Rooftop \"Loft\"");
    assert_eq!(&rows[1][6], "city views\nopen bar");
    assert_eq!(&rows[1][1], "");
}

#[test]
fn typed_venues_export_with_their_own_schema() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("venues.csv");
    let mut barn = Venue::new("Barn");
    barn.reviews = Some(31);
    let venues: Vec<Record> = vec![barn.into(), Record::from(Venue::new("Loft"))];

    save_venues_to_csv(&venues, &Venue::schema(), &out).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("name,location,price,capacity,rating,reviews,description,url"));
    assert!(text.contains("Barn,,,,,31,,"));
}
