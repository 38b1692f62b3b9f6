use super::*;

#[test]
fn test_parse_size_mb_units() {
    assert_eq!(parse_size_mb("10 GB"), 10240.0);
    assert_eq!(parse_size_mb("512 MB"), 512.0);
    assert_eq!(parse_size_mb("2048 KB"), 2.0);
    assert_eq!(parse_size_mb("12.5GB"), 12800.0);
    assert_eq!(parse_size_mb("  700 mb"), 700.0);
}

#[test]
fn test_parse_size_mb_unknown() {
    assert_eq!(parse_size_mb("unknown"), f64::INFINITY);
    assert_eq!(parse_size_mb(""), f64::INFINITY);
    assert_eq!(parse_size_mb("GB"), f64::INFINITY);
    // number but no unit
    assert_eq!(parse_size_mb("1500"), f64::INFINITY);
    assert_eq!(parse_size_mb("3 TB"), f64::INFINITY);
}

#[test]
fn test_leading_number() {
    assert_eq!(leading_number("12.3 GB"), Some(12.3));
    assert_eq!(leading_number(".5"), Some(0.5));
    assert_eq!(leading_number("1.2.3"), Some(1.2));
    assert_eq!(leading_number("4/5"), Some(4.0));
    assert_eq!(leading_number("abc"), None);
    assert_eq!(leading_number("."), None);
}

#[test]
fn test_format_megabytes() {
    assert_eq!(format_megabytes(512.0), "512.0 MB");
    assert_eq!(format_megabytes(1536.0), "1.5 GB");
    assert_eq!(format_megabytes(0.5), "512.0 KB");
    assert_eq!(format_megabytes(2.0 * 1024.0 * 1024.0), "2.0 TB");
    assert_eq!(format_megabytes(f64::INFINITY), "unknown");
}

#[test]
fn test_parse_release_date_formats() {
    let day = NaiveDate::from_ymd_opt(2023, 5, 12).unwrap();
    assert_eq!(parse_release_date("2023-05-12"), Some(day));
    assert_eq!(parse_release_date("2023-05-12T08:30:00Z"), Some(day));
    assert_eq!(parse_release_date("2023-05-12T08:30:00"), Some(day));
    assert_eq!(
        parse_release_date("2023-05"),
        NaiveDate::from_ymd_opt(2023, 5, 1)
    );
    assert_eq!(
        parse_release_date("2019"),
        NaiveDate::from_ymd_opt(2019, 1, 1)
    );
}

#[test]
fn test_parse_release_date_garbage() {
    assert_eq!(parse_release_date("soon"), None);
    assert_eq!(parse_release_date(""), None);
    assert_eq!(parse_release_date("2023-13-40"), None);
}
