#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::config::{LevelConfig, Playfield};
    use crate::constants::*;
    use crate::entities::{Enemy, Projectile, Ship};
    use crate::enums::*;
    use crate::events::MatchEvent;
    use crate::id::{EntityId, IdSource, SequentialIdSource};
    use crate::input::{InputIntent, MoveAxis};
    use crate::state::{StepOutcome, WorldSnapshot};
    use crate::types::{Aabb, SimTime};

    fn test_ship(id: &str) -> Ship {
        Ship {
            id: EntityId::new(id),
            pos: Vec2::new(100.0, 500.0),
            size: SHIP_SIZE,
            health: SHIP_MAX_HEALTH,
            sprite: None,
            fire_cooldown: 0.0,
        }
    }

    // ---- Geometry ----

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    /// Touching edges must not count as overlap (exclusive bounds), so
    /// adjacent formation slots never register collisions.
    #[test]
    fn test_overlap_touching_edges_excluded() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let right = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let below = Aabb::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_overlap_contained() {
        let outer = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(40.0, 40.0));
        let inner = Aabb::new(Vec2::new(10.0, 10.0), Vec2::new(5.0, 5.0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_aabb_edges_and_center() {
        let a = Aabb::new(Vec2::new(2.0, 3.0), Vec2::new(10.0, 20.0));
        assert_eq!(a.right(), 12.0);
        assert_eq!(a.bottom(), 23.0);
        assert_eq!(a.center(), Vec2::new(7.0, 13.0));
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..4 {
            time.advance(0.25);
        }
        assert_eq!(time.tick, 4);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-6);
    }

    // ---- Ids ----

    #[test]
    fn test_sequential_ids_unique_and_ordered() {
        let mut ids = SequentialIdSource::new();
        let minted: Vec<EntityId> = (0..100).map(|_| ids.next_id()).collect();

        let mut sorted = minted.clone();
        sorted.sort();
        assert_eq!(minted, sorted, "mint order should equal sort order");
        sorted.dedup();
        assert_eq!(sorted.len(), 100);
    }

    #[test]
    fn test_two_sources_yield_same_sequence() {
        let mut a = SequentialIdSource::new();
        let mut b = SequentialIdSource::new();
        for _ in 0..10 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }

    // ---- Entity accessors ----

    #[test]
    fn test_ship_muzzle_top_center() {
        let ship = test_ship("ship");
        assert_eq!(ship.muzzle(), Vec2::new(100.0 + SHIP_SIZE.x * 0.5, 500.0));
    }

    #[test]
    fn test_projectile_aabb_centered() {
        let p = Projectile {
            id: EntityId::new("p"),
            pos: Vec2::new(50.0, 60.0),
            radius: 5.0,
            velocity: Vec2::new(0.0, -SHIP_PROJECTILE_SPEED),
            source: ProjectileSource::Ship,
            fired_by: EntityId::new("ship"),
        };
        let bb = p.aabb();
        assert_eq!(bb.min, Vec2::new(45.0, 55.0));
        assert_eq!(bb.size, Vec2::new(10.0, 10.0));
    }

    // ---- Snapshot queries ----

    fn snapshot_with_enemies(enemies: Vec<Enemy>) -> WorldSnapshot {
        WorldSnapshot {
            time: SimTime::default(),
            ship: test_ship("ship"),
            enemies,
            projectiles: Vec::new(),
            score: 0,
            rng_seed: 7,
            events: Vec::new(),
        }
    }

    fn enemy_at(id: &str, y: f32) -> Enemy {
        Enemy {
            id: EntityId::new(id),
            pos: Vec2::new(100.0, y),
            size: ENEMY_SIZE,
            kind: EnemyKind::Basic,
            sprite: None,
            fire_cooldown: 1.0,
        }
    }

    #[test]
    fn test_win_cause_cleared() {
        let snap = snapshot_with_enemies(Vec::new());
        assert_eq!(
            snap.win_cause(Playfield::default()),
            Some(WinCause::FormationCleared)
        );
    }

    #[test]
    fn test_win_cause_exited() {
        let field = Playfield::default();
        let snap = snapshot_with_enemies(vec![
            enemy_at("a", field.height + 1.0),
            enemy_at("b", field.height + 50.0),
        ]);
        assert_eq!(snap.win_cause(field), Some(WinCause::FormationExited));
    }

    #[test]
    fn test_win_cause_none_while_fighting() {
        let field = Playfield::default();
        let snap =
            snapshot_with_enemies(vec![enemy_at("a", 100.0), enemy_at("b", field.height + 1.0)]);
        assert_eq!(snap.win_cause(field), None);
    }

    #[test]
    fn test_summary_fields() {
        let mut snap = snapshot_with_enemies(vec![enemy_at("a", 100.0)]);
        snap.score = 40;
        snap.time.advance(1.5);
        let summary = snap.summary();
        assert_eq!(summary.score, 40);
        assert_eq!(summary.enemies_remaining, 1);
        assert_eq!(summary.ship_health, SHIP_MAX_HEALTH);
        assert!((summary.duration_secs - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_order_sorts_by_id() {
        let mut snap =
            snapshot_with_enemies(vec![enemy_at("00000003", 0.0), enemy_at("00000001", 0.0)]);
        snap.normalize_order();
        assert_eq!(snap.enemies[0].id, EntityId::new("00000001"));
        assert_eq!(snap.enemies[1].id, EntityId::new("00000003"));
    }

    // ---- Serde ----

    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Heavy];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_move_axis_serde() {
        let variants = vec![MoveAxis::Left, MoveAxis::Still, MoveAxis::Right];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: MoveAxis = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_win_loss_cause_serde() {
        for v in [WinCause::FormationCleared, WinCause::FormationExited] {
            let json = serde_json::to_string(&v).unwrap();
            let back: WinCause = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        let json = serde_json::to_string(&LossCause::ShipDestroyed).unwrap();
        let back: LossCause = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LossCause::ShipDestroyed);
    }

    /// MatchEvent uses a tagged representation for frontend consumption.
    #[test]
    fn test_match_event_serde() {
        let events = vec![
            MatchEvent::ShipFired {
                projectile_id: EntityId::new("p1"),
            },
            MatchEvent::EnemyFired {
                enemy_id: EntityId::new("e1"),
                projectile_id: EntityId::new("p2"),
            },
            MatchEvent::EnemyDestroyed {
                enemy_id: EntityId::new("e1"),
                attributed_to: EntityId::new("ship"),
            },
            MatchEvent::ShipHit {
                remaining_health: 2,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            assert!(json.contains("\"type\""));
            let back: MatchEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snap = snapshot_with_enemies(vec![enemy_at("a", 100.0)]);
        let json = serde_json::to_string(&snap).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }

    #[test]
    fn test_step_outcome_accessors() {
        let snap = snapshot_with_enemies(vec![enemy_at("a", 100.0)]);
        let cont = StepOutcome::Continue(snap.clone());
        assert!(!cont.is_terminal());
        assert_eq!(cont.world().score, 0);

        let win = StepOutcome::Win {
            cause: WinCause::FormationCleared,
            world: snap.clone(),
        };
        let loss = StepOutcome::Loss {
            cause: LossCause::ShipDestroyed,
            world: snap,
        };
        assert!(win.is_terminal());
        assert!(loss.is_terminal());
    }

    #[test]
    fn test_level_config_defaults() {
        let config = LevelConfig::default();
        assert_eq!(config.enemy_speed, 80.0);
        assert_eq!(config.enemy_fire_interval_secs, 1.2);
        assert_eq!(config.initial_enemy_count, 12);
        assert_eq!(config.time_acceleration, 0.02);
    }

    #[test]
    fn test_input_intent_default_is_idle() {
        let intent = InputIntent::default();
        assert_eq!(intent.move_axis, MoveAxis::Still);
        assert!(!intent.firing);
        assert_eq!(MoveAxis::Left.sign(), -1.0);
        assert_eq!(MoveAxis::Still.sign(), 0.0);
        assert_eq!(MoveAxis::Right.sign(), 1.0);
    }
}
