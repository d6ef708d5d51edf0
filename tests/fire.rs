mod tests {
    use emberstrip::effect::cool_and_clamp;
    use emberstrip::{ConfigError, Effect, FireConfig, FireEffect, PaletteSweep, Rgb, heat_to_color};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Config that disables sparking, cooling and clamping, leaving
    /// pure diffusion.
    const DIFFUSION_ONLY: FireConfig = FireConfig {
        spark_chance: 1.0,
        cooldown: 1.0,
        min_heat: 0,
        max_heat: 255,
    };

    #[test]
    fn test_uniform_field_is_diffusion_fixpoint() {
        let mut fire = FireEffect::<16>::new(DIFFUSION_ONLY, 7)
            .unwrap()
            .with_heat([100; 16]);
        let mut leds = [BLACK; 16];

        fire.render(&mut leds);

        assert_eq!(fire.heat(), &[100; 16]);
        assert_eq!(leds, [heat_to_color(100); 16]);
    }

    #[test]
    fn test_uniform_fixpoint_holds_for_short_strips() {
        // The circular neighborhood degenerates below five cells;
        // the weighted average must still reproduce a uniform field.
        let mut fire = FireEffect::<1>::new(DIFFUSION_ONLY, 7)
            .unwrap()
            .with_heat([42; 1]);
        fire.render(&mut [BLACK; 1]);
        assert_eq!(fire.heat(), &[42]);

        let mut fire = FireEffect::<3>::new(DIFFUSION_ONLY, 7)
            .unwrap()
            .with_heat([42; 3]);
        fire.render(&mut [BLACK; 3]);
        assert_eq!(fire.heat(), &[42; 3]);
    }

    #[test]
    fn test_diffusion_uses_floor_division() {
        // Neighborhood sum around cell 0: 3*10 + 2*1 + 0 + 2*1 + 0 = 34,
        // 34 / 9 = 3 after flooring.
        let mut heat = [0u8; 8];
        heat[0] = 10;
        heat[1] = 1;
        heat[7] = 1;
        let mut fire = FireEffect::<8>::new(DIFFUSION_ONLY, 7)
            .unwrap()
            .with_heat(heat);

        fire.render(&mut [BLACK; 8]);
        assert_eq!(fire.heat()[0], 3);
    }

    #[test]
    fn test_cooldown_truncates_and_clamps_in_order() {
        // Cooldown truncates toward zero
        assert_eq!(cool_and_clamp(100, 0.98, 0, 255), 98);
        assert_eq!(cool_and_clamp(99, 0.98, 0, 255), 97); // 97.02
        assert_eq!(cool_and_clamp(255, 1.0, 0, 255), 255);

        // Ceiling clamp, then floor clamp
        assert_eq!(cool_and_clamp(255, 1.0, 20, 200), 200);
        assert_eq!(cool_and_clamp(5, 1.0, 20, 200), 20);

        // Misconfigured bounds (floor above ceiling): the ceiling is
        // applied first, then the floor pulls the result back up.
        // Source ordering, preserved as is.
        assert_eq!(cool_and_clamp(255, 1.0, 20, 10), 20);
        assert_eq!(cool_and_clamp(255, 1.0, 0, 10), 10);
    }

    #[test]
    fn test_heat_stays_within_configured_bounds() {
        let config = FireConfig::default();
        let mut fire = FireEffect::<32>::new(config, 1234).unwrap();
        let mut leds = [BLACK; 32];

        for _ in 0..50 {
            fire.render(&mut leds);
            for (i, heat) in fire.heat().iter().enumerate() {
                assert!(
                    (config.min_heat..=config.max_heat).contains(heat),
                    "cell {i} heat {heat} escaped [{}, {}]",
                    config.min_heat,
                    config.max_heat
                );
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_run() {
        let mut first = FireEffect::<24>::new(FireConfig::default(), 99).unwrap();
        let mut second = FireEffect::<24>::new(FireConfig::default(), 99).unwrap();
        assert_eq!(first.heat(), second.heat());

        let mut leds_first = [BLACK; 24];
        let mut leds_second = [BLACK; 24];
        for _ in 0..10 {
            first.render(&mut leds_first);
            second.render(&mut leds_second);
            assert_eq!(leds_first, leds_second);
            assert_eq!(first.heat(), second.heat());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let first = FireEffect::<24>::new(FireConfig::default(), 1).unwrap();
        let second = FireEffect::<24>::new(FireConfig::default(), 2).unwrap();
        assert_ne!(first.heat(), second.heat());
    }

    #[test]
    fn test_rejects_malformed_config() {
        let config = FireConfig {
            spark_chance: 1.5,
            ..FireConfig::default()
        };
        assert_eq!(
            FireEffect::<8>::new(config, 0).unwrap_err(),
            ConfigError::SparkChance(1.5)
        );

        let config = FireConfig {
            cooldown: -0.1,
            ..FireConfig::default()
        };
        assert_eq!(
            FireEffect::<8>::new(config, 0).unwrap_err(),
            ConfigError::Cooldown(-0.1)
        );

        let config = FireConfig {
            min_heat: 201,
            max_heat: 200,
            ..FireConfig::default()
        };
        assert_eq!(
            FireEffect::<8>::new(config, 0).unwrap_err(),
            ConfigError::HeatBounds { min: 201, max: 200 }
        );
    }

    #[test]
    fn test_sweep_shows_whole_ramp_and_wraps() {
        let mut sweep = PaletteSweep::new();
        let mut leds = [BLACK; 8];

        sweep.render(&mut leds);
        let first: [Rgb; 8] = leds;
        for (i, led) in first.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let heat = (i * 256 / 8) as u8;
            assert_eq!(*led, heat_to_color(heat));
        }

        sweep.render(&mut leds);
        assert_eq!(leds[0], heat_to_color(1));

        // 255 more steps wrap the phase back to the first frame
        for _ in 0..255 {
            sweep.render(&mut leds);
        }
        assert_eq!(leds, first);
    }
}
