//! Unit tests for tm-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{Compass, GeoPoint};

    fn random_point(rng: &mut SmallRng) -> GeoPoint {
        GeoPoint::new(rng.gen_range(-80.0..80.0), rng.gen_range(-179.0..179.0))
            .with_elevation(rng.gen_range(0.0..3_000.0))
    }

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(19.0544, 72.8406);
        assert!(p.distance_km(p) < 1e-9);
        assert!(p.distance_3d_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.195 km on a 6371 km sphere.
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn bandra_to_kurla() {
        let bandra = GeoPoint::new(19.0544, 72.8406);
        let kurla = GeoPoint::new(19.0728, 72.8826);
        let d = bandra.distance_km(kurla);
        assert!((d - 4.865).abs() < 0.02, "got {d}");
    }

    #[test]
    fn symmetric_for_random_pairs() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-6);
            assert!((a.distance_3d_km(b) - b.distance_3d_km(a)).abs() < 1e-6);
        }
    }

    #[test]
    fn triangle_inequality_for_random_triples() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            let c = random_point(&mut rng);
            let direct = a.distance_km(c);
            let detour = a.distance_km(b) + b.distance_km(c);
            assert!(direct <= detour + 1e-6, "{direct} > {detour}");
        }
    }

    #[test]
    fn elevation_lengthens_distance() {
        let low = GeoPoint::new(19.0, 72.8);
        let high = GeoPoint::new(19.0, 72.8).with_elevation(3_000.0);
        // Same horizontal position: the 3-D distance is purely vertical.
        assert!((low.distance_3d_km(high) - 3.0).abs() < 1e-9);

        let far = GeoPoint::new(19.1, 72.8).with_elevation(500.0);
        assert!(low.distance_3d_km(far) > low.distance_km(far));
    }

    #[test]
    fn cardinal_bearings() {
        let origin = GeoPoint::new(0.0, 0.0);
        assert!((origin.bearing_deg(GeoPoint::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((origin.bearing_deg(GeoPoint::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((origin.bearing_deg(GeoPoint::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((origin.bearing_deg(GeoPoint::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_always_normalised() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..500 {
            let b = random_point(&mut rng).bearing_deg(random_point(&mut rng));
            assert!((0.0..360.0).contains(&b), "got {b}");
        }
    }

    #[test]
    fn compass_sectors() {
        assert_eq!(Compass::from_bearing(0.0), Compass::N);
        assert_eq!(Compass::from_bearing(359.0), Compass::N);
        assert_eq!(Compass::from_bearing(44.0), Compass::NE);
        assert_eq!(Compass::from_bearing(90.0), Compass::E);
        assert_eq!(Compass::from_bearing(200.0), Compass::S);
        assert_eq!(Compass::from_bearing(300.0), Compass::NW);
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, HourOfDay, TrafficPeriod};

    #[test]
    fn rejects_out_of_range_hours() {
        assert!(HourOfDay::new(23).is_ok());
        assert_eq!(HourOfDay::new(24), Err(CoreError::InvalidHour(24)));
    }

    #[test]
    fn period_boundaries() {
        let period = |h| HourOfDay::new(h).unwrap().period();
        assert_eq!(period(6), TrafficPeriod::Night);
        assert_eq!(period(7), TrafficPeriod::Rush);
        assert_eq!(period(9), TrafficPeriod::Rush);
        assert_eq!(period(10), TrafficPeriod::Normal);
        assert_eq!(period(17), TrafficPeriod::Normal);
        assert_eq!(period(18), TrafficPeriod::Rush);
        assert_eq!(period(20), TrafficPeriod::Rush);
        assert_eq!(period(21), TrafficPeriod::Normal);
        assert_eq!(period(22), TrafficPeriod::Night);
        assert_eq!(period(0), TrafficPeriod::Night);
    }

    #[test]
    fn now_is_a_valid_hour() {
        assert!(HourOfDay::now().get() <= 23);
    }

    #[test]
    fn display() {
        assert_eq!(HourOfDay::new(8).unwrap().to_string(), "08:00");
    }
}

#[cfg(test)]
mod config {
    use crate::NetworkConfig;

    #[test]
    fn defaults_match_reference_limits() {
        let c = NetworkConfig::default();
        assert_eq!(c.max_nodes, 50);
        assert_eq!(c.max_edges, 200);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_limits() {
        assert!(NetworkConfig::new(0, 10).is_err());
        assert!(NetworkConfig::new(10, 7).is_err());
    }

    #[test]
    fn rejects_limits_too_small_for_one_road() {
        assert!(NetworkConfig::new(10, 0).is_err());
        assert!(NetworkConfig::new(1, 10).is_err());
        let two = NetworkConfig::new(2, 2).unwrap();
        assert_eq!((two.max_nodes, two.max_edges), (2, 2));
    }
}
