use crate::domain::model::Coordinate;

/// Parses a raw "lat lon" cell into a coordinate. Anything that is not
/// exactly two float tokens comes back as `None`; bad cells drop the row
/// downstream instead of failing the run.
pub fn parse_coordinate(raw: &str) -> Option<Coordinate> {
    let mut tokens = raw.split_whitespace();
    let lat = tokens.next()?.parse::<f64>().ok()?;
    let lon = tokens.next()?.parse::<f64>().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(Coordinate::new(lat, lon))
}
