//! Map projection: the geocoded subset of the records and the camera
//! instruction that frames it.

use restomap_core::{Coordinate, MapSettings, Record};
use serde::Serialize;

use crate::search::{filter_records, SearchQuery};

/// Padding applied to each edge of the viewport when fitting a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgePadding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl EdgePadding {
    #[must_use]
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }
}

/// Smallest latitude/longitude rectangle containing a set of points.
///
/// Does not wrap across the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl BoundingBox {
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_coordinates(points: &[Coordinate]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut south_west = *first;
        let mut north_east = *first;
        for p in rest {
            south_west.lat = south_west.lat.min(p.lat);
            south_west.lng = south_west.lng.min(p.lng);
            north_east.lat = north_east.lat.max(p.lat);
            north_east.lng = north_east.lng.max(p.lng);
        }
        Some(Self {
            south_west,
            north_east,
        })
    }

    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }

    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            lng: (self.south_west.lng + self.north_east.lng) / 2.0,
        }
    }
}

/// How the map viewport should be positioned for the visible markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CameraInstruction {
    /// Nothing to show; leave the camera where it is.
    None,
    /// A single marker: center on it at a fixed close zoom.
    CenterZoom { center: Coordinate, zoom: f64 },
    /// Several markers: fit all of them with padding on every edge.
    FitBounds {
        coordinates: Vec<Coordinate>,
        padding: EdgePadding,
        bounds: BoundingBox,
    },
}

/// Decides the camera framing for a set of visible points.
///
/// Zero points issue no camera change, one point centers on it at
/// `settings.center_zoom`, and two or more fit their bounding box with
/// `settings.fit_padding_px` on each edge. The result depends only on the
/// inputs, so repeated calls agree.
#[must_use]
pub fn frame_camera(points: &[Coordinate], settings: &MapSettings) -> CameraInstruction {
    match points {
        [] => CameraInstruction::None,
        [only] => CameraInstruction::CenterZoom {
            center: *only,
            zoom: settings.center_zoom,
        },
        many => match BoundingBox::from_coordinates(many) {
            Some(bounds) => CameraInstruction::FitBounds {
                coordinates: many.to_vec(),
                padding: EdgePadding::uniform(settings.fit_padding_px),
                bounds,
            },
            None => CameraInstruction::None,
        },
    }
}

/// Returns the records with both coordinates present and finite, in order.
pub fn geocoded<'a, I>(records: I) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter(|r| r.is_geocoded()).collect()
}

/// Markers and camera framing for the map presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView<'a> {
    pub markers: Vec<&'a Record>,
    pub camera: CameraInstruction,
}

impl<'a> MapView<'a> {
    /// Geocoded records matching `query`, framed per `settings`.
    ///
    /// The geocoded narrowing runs first and the search runs over its result.
    #[must_use]
    pub fn project(records: &'a [Record], query: &SearchQuery, settings: &MapSettings) -> Self {
        let markers = filter_records(geocoded(records), query);
        let points: Vec<Coordinate> = markers.iter().filter_map(|r| r.coordinate()).collect();
        let camera = frame_camera(&points, settings);
        Self { markers, camera }
    }

    /// `true` when there is nothing mappable to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
