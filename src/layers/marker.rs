use crate::{
    core::{geo::Point, projector::GeoProjector, region::Region},
    data::model::SalesRep,
    prelude::HashMap,
};
use serde::Serialize;

/// One map annotation per region that has at least one rep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub region: Region,
    pub coordinate: Point,
    /// Reps in the region, shown next to the label
    pub rep_count: usize,
}

impl Marker {
    pub fn label(&self) -> &'static str {
        self.region.name()
    }
}

/// Derives region markers from the raw rep list
#[derive(Debug, Clone, Default)]
pub struct MarkerAggregator {
    projector: GeoProjector,
}

impl MarkerAggregator {
    pub fn new(projector: GeoProjector) -> Self {
        Self { projector }
    }

    /// One marker per distinct region in first-occurrence order. Regions
    /// without a coordinate are dropped; their reps stay list-visible.
    pub fn aggregate(&self, reps: &[SalesRep]) -> Vec<Marker> {
        let mut markers: Vec<Marker> = Vec::new();
        let mut slots: HashMap<&str, Option<usize>> = HashMap::default();

        for rep in reps {
            let slot = *slots.entry(rep.region.as_str()).or_insert_with(|| {
                let region = Region::from_name(&rep.region)?;
                let coordinate = self.projector.coordinate(&rep.region)?;
                markers.push(Marker {
                    region,
                    coordinate,
                    rep_count: 0,
                });
                Some(markers.len() - 1)
            });
            if let Some(index) = slot {
                markers[index].rep_count += 1;
            }
        }

        let dropped = slots.values().filter(|slot| slot.is_none()).count();
        if dropped > 0 {
            log::debug!("{} region(s) have no map coordinate and get no marker", dropped);
        }
        markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::HashSet;

    fn rep(id: u64, region: &str) -> SalesRep {
        SalesRep {
            id,
            name: format!("Rep {id}"),
            role: "Account Executive".into(),
            region: region.into(),
            skills: vec![],
            clients: vec![],
            deals: vec![],
        }
    }

    #[test]
    fn test_two_regions_three_reps() {
        let reps = vec![rep(1, "Europe"), rep(2, "Europe"), rep(3, "Asia-Pacific")];
        let markers = MarkerAggregator::default().aggregate(&reps);

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].region, Region::Europe);
        assert_eq!(markers[0].coordinate, Point::new(10.0, 50.0));
        assert_eq!(markers[0].rep_count, 2);
        assert_eq!(markers[1].region, Region::AsiaPacific);
        assert_eq!(markers[1].coordinate, Point::new(110.0, 15.0));
        assert_eq!(markers[1].rep_count, 1);
    }

    #[test]
    fn test_unmapped_regions_dropped() {
        let reps = vec![rep(1, "Antarctica"), rep(2, "Middle East"), rep(3, "Antarctica")];
        let markers = MarkerAggregator::default().aggregate(&reps);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].label(), "Middle East");
    }

    #[test]
    fn test_at_most_one_marker_per_region() {
        let regions = ["Europe", "North America", "Europe", "South America", "North America", "Mars"];
        let reps: Vec<SalesRep> = regions
            .iter()
            .enumerate()
            .map(|(i, r)| rep(i as u64, r))
            .collect();
        let markers = MarkerAggregator::default().aggregate(&reps);

        let distinct: HashSet<Region> = markers.iter().map(|m| m.region).collect();
        assert_eq!(distinct.len(), markers.len());
        assert!(markers.iter().all(|m| m.coordinate.is_valid()));
        assert_eq!(
            markers.iter().map(|m| m.region).collect::<Vec<_>>(),
            vec![Region::Europe, Region::NorthAmerica, Region::SouthAmerica]
        );
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let reps = vec![rep(1, "Europe"), rep(2, "Asia-Pacific")];
        let aggregator = MarkerAggregator::default();
        assert_eq!(aggregator.aggregate(&reps), aggregator.aggregate(&reps));
        assert!(aggregator.aggregate(&[]).is_empty());
    }
}
