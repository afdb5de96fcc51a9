//! Delivery timeline derivation
//!
//! Turns the raw tracking steps of a delivery into per-step display states and
//! lays out the placeholder map.

use serde::Serialize;

use crate::types::{LocationData, TrackingStep};

/// Where a step sits relative to the delivery's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

/// Line drawn from a step to the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorState {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub label: String,
    pub time: String,
    pub state: StepState,
    /// `None` for the last step
    pub connector: Option<ConnectorState>,
}

/// Index of the first incomplete step; `None` once every step is complete
pub fn current_step(steps: &[TrackingStep]) -> Option<usize> {
    steps.iter().position(|step| !step.completed)
}

pub fn is_finished(steps: &[TrackingStep]) -> bool {
    current_step(steps).is_none()
}

pub fn step_views(steps: &[TrackingStep]) -> Vec<StepView> {
    let current = current_step(steps);

    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let state = if step.completed {
                StepState::Completed
            } else if Some(index) == current {
                StepState::Current
            } else {
                StepState::Upcoming
            };

            let connector = steps.get(index + 1).map(|next| {
                if step.completed && next.completed {
                    ConnectorState::Completed
                } else if step.completed && Some(index + 1) == current {
                    ConnectorState::Active
                } else {
                    ConnectorState::Pending
                }
            });

            StepView {
                label: step.label.clone(),
                time: step.time.clone(),
                state,
                connector,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Restaurant,
    Destination,
    Courier,
}

/// Marker placed on the map placeholder, positioned in percent of the map box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub left: u8,
    pub top: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapView {
    pub markers: Vec<MapMarker>,
    /// The dashed route is only drawn when all three points are known
    pub show_route: bool,
}

/// Placeholder map layout; `None` means "No tracking data available".
///
/// Positions are fixed slots rather than projected coordinates.
pub fn map_view(location: Option<&LocationData>) -> Option<MapView> {
    let location = location?;

    let slots = [
        (location.restaurant.is_some(), MarkerKind::Restaurant, 30, 40),
        (location.destination.is_some(), MarkerKind::Destination, 70, 60),
        (location.courier.is_some(), MarkerKind::Courier, 50, 50),
    ];

    let markers = slots
        .into_iter()
        .filter(|(present, ..)| *present)
        .map(|(_, kind, left, top)| MapMarker { kind, left, top })
        .collect::<Vec<_>>();

    Some(MapView {
        show_route: markers.len() == slots.len(),
        markers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::types::GeoPoint;

    fn steps(flags: &[bool]) -> Vec<TrackingStep> {
        flags
            .iter()
            .enumerate()
            .map(|(i, done)| {
                if *done {
                    TrackingStep::done(&format!("step {i}"), "10:00 AM")
                } else {
                    TrackingStep::outstanding(&format!("step {i}"))
                }
            })
            .collect()
    }

    #[test]
    fn test_current_step_is_first_incomplete() {
        assert_eq!(current_step(&steps(&[true, true, false, false])), Some(2));
        assert_eq!(current_step(&steps(&[false, false])), Some(0));
        assert_eq!(current_step(&steps(&[true, true])), None);
        assert!(is_finished(&[]));
    }

    #[test]
    fn test_step_states_and_connectors() {
        let views = step_views(&steps(&[true, true, false, false]));

        let states: Vec<_> = views.iter().map(|v| v.state).collect();
        assert_eq!(
            states,
            [StepState::Completed, StepState::Completed, StepState::Current, StepState::Upcoming]
        );

        let connectors: Vec<_> = views.iter().map(|v| v.connector).collect();
        assert_eq!(
            connectors,
            [
                Some(ConnectorState::Completed),
                Some(ConnectorState::Active),
                Some(ConnectorState::Pending),
                None,
            ]
        );
    }

    #[test]
    fn test_finished_delivery_has_no_current_step() {
        let delivery = &catalog::completed_deliveries()[0];
        let views = step_views(&delivery.steps);
        assert!(views.iter().all(|v| v.state == StepState::Completed));
        assert_eq!(views.last().and_then(|v| v.connector), None);
    }

    #[test]
    fn test_map_view_route_needs_all_points() {
        assert_eq!(map_view(None), None);

        let full = catalog::active_deliveries()[0].location;
        let view = map_view(full.as_ref()).unwrap();
        assert_eq!(view.markers.len(), 3);
        assert!(view.show_route);

        let partial = LocationData {
            restaurant: Some(GeoPoint::new(1.0, 2.0)),
            destination: None,
            courier: Some(GeoPoint::new(1.5, 2.5)),
        };
        let view = map_view(Some(&partial)).unwrap();
        assert_eq!(view.markers.len(), 2);
        assert!(!view.show_route);
    }
}
