use naobot_core::{normalize_or_zero, planar, rotate_about_z, Angle, Vector3, WorldView};

/// Parameters of a single collision-avoidance query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvoidanceRequest {
    pub avoid_teammates: bool,
    pub avoid_opponents: bool,
    pub avoid_ball: bool,
    /// Obstacles farther than this are ignored.
    pub proximity_threshold: f64,
    /// Obstacles closer than this force a full side-step.
    pub collision_threshold: f64,
    /// The target before adjustment, in global coordinates.
    pub target: Vector3,
    /// Also avoid obstacles that are farther away than the target.
    pub keep_distance: bool,
}

impl AvoidanceRequest {
    /// A request that avoids nothing and keeps distance, with the given thresholds.
    pub fn towards(target: Vector3, proximity_threshold: f64, collision_threshold: f64) -> Self {
        Self {
            avoid_teammates: false,
            avoid_opponents: false,
            avoid_ball: false,
            proximity_threshold,
            collision_threshold,
            target,
            keep_distance: true,
        }
    }

    pub fn avoid_teammates(mut self) -> Self {
        self.avoid_teammates = true;
        self
    }

    pub fn avoid_opponents(mut self) -> Self {
        self.avoid_opponents = true;
        self
    }

    pub fn avoid_ball(mut self) -> Self {
        self.avoid_ball = true;
        self
    }

    pub fn keep_distance(mut self, keep_distance: bool) -> Self {
        self.keep_distance = keep_distance;
        self
    }
}

/// Adjusts a raw walking target so that the agent keeps clear of other objects.
///
/// Implementations must be deterministic for a fixed world and request.
pub trait CollisionAvoidance {
    fn adjust(&self, world: &dyn WorldView, request: &AvoidanceRequest) -> Vector3;
}

/// Steers around the nearest obstacle between the agent and its target by stepping
/// sideways, blending back towards the target as the obstacle gets farther away.
#[derive(Clone, Copy, Debug, Default)]
pub struct SidestepPlanner;

impl SidestepPlanner {
    fn obstacles(world: &dyn WorldView, request: &AvoidanceRequest) -> Vec<Vector3> {
        let mut obstacles = Vec::new();
        if request.avoid_ball {
            obstacles.push(planar(world.ball_position()));
        }
        if request.avoid_teammates {
            let me = world.my_id();
            obstacles.extend(
                world
                    .known_teammates()
                    .into_iter()
                    .filter(|(id, _)| *id != me)
                    .map(|(_, pos)| pos),
            );
        }
        if request.avoid_opponents {
            obstacles.extend(world.known_opponents());
        }
        obstacles
    }
}

impl CollisionAvoidance for SidestepPlanner {
    fn adjust(&self, world: &dyn WorldView, request: &AvoidanceRequest) -> Vector3 {
        let me = planar(world.my_position());
        let to_target = planar(request.target) - me;
        let reach = to_target.norm();

        // Nearest obstacle ahead of us
        let nearest = Self::obstacles(world, request)
            .into_iter()
            .map(|pos| (pos, (pos - me).norm()))
            .filter(|(pos, dist)| {
                (pos - me).dot(&to_target) > 0.0 && (request.keep_distance || *dist <= reach)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let Some((obstacle, dist)) = nearest else {
            return request.target;
        };
        if dist >= request.proximity_threshold {
            return request.target;
        }

        let away = normalize_or_zero(obstacle - me);
        let left = rotate_about_z(away, Angle::PI_2);
        let right = rotate_about_z(away, -Angle::PI_2);
        let side = if (me + left - request.target).norm() <= (me + right - request.target).norm()
        {
            left
        } else {
            right
        };

        if dist <= request.collision_threshold {
            log::trace!("side-stepping obstacle at {:.2}m", dist);
            return me + side;
        }

        // Linear blend between heading to the target and the side-step
        let band = request.proximity_threshold - request.collision_threshold;
        let weight = if band > f64::EPSILON {
            (request.proximity_threshold - dist) / band
        } else {
            1.0
        };
        let heading =
            normalize_or_zero(normalize_or_zero(to_target) * (1.0 - weight) + side * weight);
        me + heading * reach
    }
}
