#[cfg(test)]
mod tests {
    use geocluster::geometry::{geographic_midpoint, CartesianPoint, GeoPoint};

    #[test]
    fn test_city_round_trips() {
        let cities = [
            GeoPoint::new(48.8566f64, 2.3522),
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(35.6762, 139.6503),
            GeoPoint::new(40.7128, -74.0060),
        ];

        for city in cities {
            let round_tripped = CartesianPoint::from_geo(&city).to_geo();
            assert!((round_tripped.latitude - city.latitude).abs() < 1e-9);
            assert!((round_tripped.longitude - city.longitude).abs() < 1e-9);
        }
    }

    #[test]
    fn test_midpoint_lies_between_london_and_paris() {
        let london = CartesianPoint::from_geo(&GeoPoint::new(51.5074f64, -0.1278));
        let paris = CartesianPoint::from_geo(&GeoPoint::new(48.8566, 2.3522));

        let midpoint = geographic_midpoint([london, paris]).unwrap();
        let geo = midpoint.to_geo();
        assert!(geo.latitude > 48.8566 && geo.latitude < 51.5074);
        assert!(geo.longitude > -0.1278 && geo.longitude < 2.3522);

        // Equidistant from both endpoints
        let to_london = midpoint.squared_distance(&london);
        let to_paris = midpoint.squared_distance(&paris);
        assert!((to_london - to_paris).abs() < 1e-9);
    }

    #[test]
    fn test_squared_distance_tracks_great_circle_order() {
        let tokyo = CartesianPoint::from_geo(&GeoPoint::new(35.6762f64, 139.6503));
        let osaka = CartesianPoint::from_geo(&GeoPoint::new(34.6937, 135.5023));
        let sydney = CartesianPoint::from_geo(&GeoPoint::new(-33.8688, 151.2093));
        let new_york = CartesianPoint::from_geo(&GeoPoint::new(40.7128, -74.0060));

        let near = tokyo.squared_distance(&osaka);
        let medium = tokyo.squared_distance(&sydney);
        let far = tokyo.squared_distance(&new_york);
        assert!(near < medium && medium < far);
    }
}
