mod concave_hull;
mod concavity;
mod convex;
mod nearby;
mod params;
mod refine;

pub use concave_hull::ConcaveHull;
pub use concavity::{
    collides_with_boundary, cosine_at, round_to_decimals, BestDivision, Division, COSINE_DECIMALS,
};
pub use convex::ConvexBoundary;
pub use nearby::{NearbyCandidates, SearchWindow, MAX_SEARCH_ATTEMPTS, WINDOW_GROWTH};
pub use params::HullParams;
pub use refine::{HullRefiner, RefineReport};
