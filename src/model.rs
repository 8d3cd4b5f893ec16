//! Typed GTFS records and the assembled dataset.
//!
//! Every field is optional text. GTFS ships numbers, times, and enums as
//! strings, individual feeds omit whole columns, and validation policy
//! belongs to whoever consumes the data. Typed structs here mean known
//! column names, not parsed values.

use crate::record::RowRecord;

/// A record shape tied to one archive member.
///
/// `from_record` moves the values it recognizes out of the row and drops the
/// rest. It never fails: a row that carries only unrecognized columns still
/// counts as a record of the member it came from.
pub trait FeedRecord: Sized {
    /// Archive member this record type is read from.
    const FILE_NAME: &'static str;

    fn from_record(record: RowRecord) -> Self;
}

/// One boarding location, from `stops.txt`.
///
/// `stop_lat` and `stop_lon` stay text until a consumer needs coordinates,
/// matching the rest of the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stop {
    pub stop_id: Option<String>,
    pub stop_name: Option<String>,
    pub stop_lat: Option<String>,
    pub stop_lon: Option<String>,
    pub location_type: Option<String>,
    pub parent_station: Option<String>,
    pub stop_code: Option<String>,
    pub stop_desc: Option<String>,
    pub zone_id: Option<String>,
    pub stop_url: Option<String>,
    pub stop_timezone: Option<String>,
    pub wheelchair_boarding: Option<String>,
}

impl FeedRecord for Stop {
    const FILE_NAME: &'static str = "stops.txt";

    fn from_record(mut record: RowRecord) -> Self {
        Self {
            stop_id: record.take("stop_id"),
            stop_name: record.take("stop_name"),
            stop_lat: record.take("stop_lat"),
            stop_lon: record.take("stop_lon"),
            location_type: record.take("location_type"),
            parent_station: record.take("parent_station"),
            stop_code: record.take("stop_code"),
            stop_desc: record.take("stop_desc"),
            zone_id: record.take("zone_id"),
            stop_url: record.take("stop_url"),
            stop_timezone: record.take("stop_timezone"),
            wheelchair_boarding: record.take("wheelchair_boarding"),
        }
    }
}

/// One scheduled call at a stop, from `stop_times.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopTime {
    pub trip_id: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub stop_id: Option<String>,
    pub stop_sequence: Option<String>,
    pub stop_headsign: Option<String>,
    pub pickup_type: Option<String>,
    pub drop_off_type: Option<String>,
    pub shape_dist_traveled: Option<String>,
}

impl FeedRecord for StopTime {
    const FILE_NAME: &'static str = "stop_times.txt";

    fn from_record(mut record: RowRecord) -> Self {
        Self {
            trip_id: record.take("trip_id"),
            arrival_time: record.take("arrival_time"),
            departure_time: record.take("departure_time"),
            stop_id: record.take("stop_id"),
            stop_sequence: record.take("stop_sequence"),
            stop_headsign: record.take("stop_headsign"),
            pickup_type: record.take("pickup_type"),
            drop_off_type: record.take("drop_off_type"),
            shape_dist_traveled: record.take("shape_dist_traveled"),
        }
    }
}

/// One vehicle journey, from `trips.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trip {
    pub route_id: Option<String>,
    pub service_id: Option<String>,
    pub trip_id: Option<String>,
    pub trip_headsign: Option<String>,
    pub trip_short_name: Option<String>,
    pub direction_id: Option<String>,
    pub block_id: Option<String>,
    pub shape_id: Option<String>,
}

impl FeedRecord for Trip {
    const FILE_NAME: &'static str = "trips.txt";

    fn from_record(mut record: RowRecord) -> Self {
        Self {
            route_id: record.take("route_id"),
            service_id: record.take("service_id"),
            trip_id: record.take("trip_id"),
            trip_headsign: record.take("trip_headsign"),
            trip_short_name: record.take("trip_short_name"),
            direction_id: record.take("direction_id"),
            block_id: record.take("block_id"),
            shape_id: record.take("shape_id"),
        }
    }
}

/// One line offered to riders, from `routes.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub route_id: Option<String>,
    pub agency_id: Option<String>,
    pub route_short_name: Option<String>,
    pub route_long_name: Option<String>,
    pub route_desc: Option<String>,
    pub route_type: Option<String>,
    pub route_url: Option<String>,
    pub route_color: Option<String>,
    pub route_text_color: Option<String>,
}

impl FeedRecord for Route {
    const FILE_NAME: &'static str = "routes.txt";

    fn from_record(mut record: RowRecord) -> Self {
        Self {
            route_id: record.take("route_id"),
            agency_id: record.take("agency_id"),
            route_short_name: record.take("route_short_name"),
            route_long_name: record.take("route_long_name"),
            route_desc: record.take("route_desc"),
            route_type: record.take("route_type"),
            route_url: record.take("route_url"),
            route_color: record.take("route_color"),
            route_text_color: record.take("route_text_color"),
        }
    }
}

/// One weekly service pattern, from `calendar.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    pub service_id: Option<String>,
    pub monday: Option<String>,
    pub tuesday: Option<String>,
    pub wednesday: Option<String>,
    pub thursday: Option<String>,
    pub friday: Option<String>,
    pub saturday: Option<String>,
    pub sunday: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl FeedRecord for Calendar {
    const FILE_NAME: &'static str = "calendar.txt";

    fn from_record(mut record: RowRecord) -> Self {
        Self {
            service_id: record.take("service_id"),
            monday: record.take("monday"),
            tuesday: record.take("tuesday"),
            wednesday: record.take("wednesday"),
            thursday: record.take("thursday"),
            friday: record.take("friday"),
            saturday: record.take("saturday"),
            sunday: record.take("sunday"),
            start_date: record.take("start_date"),
            end_date: record.take("end_date"),
        }
    }
}

/// One calendar exception, from `calendar_dates.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarDate {
    pub service_id: Option<String>,
    pub date: Option<String>,
    pub exception_type: Option<String>,
}

impl FeedRecord for CalendarDate {
    const FILE_NAME: &'static str = "calendar_dates.txt";

    fn from_record(mut record: RowRecord) -> Self {
        Self {
            service_id: record.take("service_id"),
            date: record.take("date"),
            exception_type: record.take("exception_type"),
        }
    }
}

/// Every table of one feed, in archive order.
///
/// A table whose member was missing or unreadable is present but empty; the
/// dataset shape never varies with archive quality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedData {
    pub stops: Vec<Stop>,
    pub stop_times: Vec<StopTime>,
    pub trips: Vec<Trip>,
    pub routes: Vec<Route>,
    pub calendar: Vec<Calendar>,
    pub calendar_dates: Vec<CalendarDate>,
}

impl FeedData {
    /// Total record count across all six tables.
    pub fn record_count(&self) -> usize {
        self.stops.len()
            + self.stop_times.len()
            + self.trips.len()
            + self.routes.len()
            + self.calendar.len()
            + self.calendar_dates.len()
    }
}
