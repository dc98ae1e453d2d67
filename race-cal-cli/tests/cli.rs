// Runs the process-cal binary against fixture files
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join("circuits.xml"),
        "<circuits>\n<circuit>\n<id>C1</id>\n<name>Speedway</name>\n<location>City</location>\n<timezone>EST</timezone>\n<direction>CW</direction>\n</circuit>\n</circuits>\n",
    )
    .unwrap();
    fs::write(
        dir.join("broadcasters.xml"),
        "<broadcasters>\n<broadcaster>\n<name>ChannelA</name>\n</broadcaster>\n</broadcasters>\n",
    )
    .unwrap();
    fs::write(
        dir.join("events.xml"),
        "<calendar>\n<event>\n<id>E1</id>\n<description>Race</description>\n<year>2022</year>\n<month>5</month>\n<day>1</day>\n<start>14:00</start>\n<end>16:00</end>\n<location>C1</location>\n<broadcaster>BR1</broadcaster>\n</event>\n</calendar>\n",
    )
    .unwrap();
}

fn process_cal(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_process-cal"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

const FULL_ARGS: [&str; 5] = [
    "--start=2022/04/01",
    "--end=2022/06/01",
    "--events=events.xml",
    "--circuits=circuits.xml",
    "--broadcasters=broadcasters.xml",
];

#[test]
fn writes_default_output() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let output = process_cal(dir.path(), &FULL_ARGS);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report = fs::read_to_string(dir.path().join("output.yaml")).unwrap();
    assert!(report.contains("  - 01-05-2022:"));
    assert!(report.contains("when: 02:00 PM - 04:00 PM Sunday, May 01, 2022 (EST)"));
}

#[test]
fn config_file_supplies_inputs() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());
    fs::write(
        dir.path().join("config.toml"),
        "[input]\nevents = \"events.xml\"\ncircuits = \"circuits.xml\"\nbroadcasters = \"broadcasters.xml\"\n\n[output]\npath = \"report.yaml\"\n",
    )
    .unwrap();

    let output = process_cal(
        dir.path(),
        &["--start=2022/04/01", "--end=2022/06/01", "--config=config.toml", "-q"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("report.yaml").exists());
    assert!(!dir.path().join("output.yaml").exists());
}

#[test]
fn missing_argument_fails() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let output = process_cal(dir.path(), &FULL_ARGS[..4]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--broadcasters"));
    assert!(!dir.path().join("output.yaml").exists());
}

#[test]
fn malformed_events_fail_without_output() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());
    fs::write(dir.path().join("events.xml"), "<calendar>\n<id>E1</id>\n</calendar>\n").unwrap();

    let output = process_cal(dir.path(), &FULL_ARGS);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Malformed record"));
    assert!(!dir.path().join("output.yaml").exists());
}

#[test]
fn record_starts_logged_at_debug() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let quiet = process_cal(dir.path(), &FULL_ARGS);
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("record start"));

    let mut args = FULL_ARGS.to_vec();
    args.push("-v");
    let verbose = process_cal(dir.path(), &args);
    assert!(verbose.status.success());

    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("[DEBUG race_cal_decoder::formats::tagfile] line 2: record start <event>"));
    assert!(!stderr.contains("TRACE"));
}

#[test]
fn single_file_listing_to_stdout() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("calendar.xml"),
        "<calendar>\n\
         <event>\n<description>Race</description>\n<timezone>EST</timezone>\n<location>City</location>\n<day>2</day>\n<month>5</month>\n<year>2022</year>\n<dweek>Monday</dweek>\n<start>14:00</start>\n<end>16:00</end>\n</event>\n\
         <event>\n<description>Practice</description>\n<timezone>EST</timezone>\n<location>City</location>\n<day>1</day>\n<month>5</month>\n<year>2022</year>\n<dweek>Sunday</dweek>\n<start>09:00</start>\n<end>10:30</end>\n</event>\n\
         <event>\n<description>Late</description>\n<timezone>EST</timezone>\n<location>City</location>\n<day>3</day>\n<month>5</month>\n<year>2022</year>\n<dweek>Tuesday</dweek>\n<start>09:00</start>\n<end>10:00</end>\n</event>\n\
         </calendar>\n",
    )
    .unwrap();

    let output = process_cal(
        dir.path(),
        &["--start=2022/05/01", "--end=2022/05/02", "--file=calendar.xml", "-q"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let expected = "May 1, 2022 (Sunday)\n\
                    --------------------\n\
                    09:00 AM to 10:30 AM: Practice {{City}} | EST\n\
                    \n\
                    May 2, 2022 (Monday)\n\
                    --------------------\n\
                    02:00 PM to 04:00 PM: Race {{City}} | EST\n";
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
    assert!(!dir.path().join("output.yaml").exists());
}

#[test]
fn file_conflicts_with_report_inputs() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let mut args = FULL_ARGS.to_vec();
    args.push("--file=events.xml");
    let output = process_cal(dir.path(), &args);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be used with"));
}
