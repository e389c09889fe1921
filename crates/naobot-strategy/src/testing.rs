use std::cell::RefCell;

use naobot_core::{Vector3, WorldView};

use crate::avoidance::{AvoidanceRequest, CollisionAvoidance};

/// Passes every target through untouched and remembers the requests it saw.
#[derive(Default)]
pub(crate) struct RecordingPlanner {
    requests: RefCell<Vec<AvoidanceRequest>>,
}

impl RecordingPlanner {
    pub fn requests(&self) -> Vec<AvoidanceRequest> {
        self.requests.borrow().clone()
    }

    /// The only request made, failing the test otherwise.
    pub fn single_request(&self) -> AvoidanceRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one planner call, got {requests:?}");
        requests[0]
    }
}

impl CollisionAvoidance for RecordingPlanner {
    fn adjust(&self, _world: &dyn WorldView, request: &AvoidanceRequest) -> Vector3 {
        self.requests.borrow_mut().push(*request);
        request.target
    }
}
