mod fallback;
mod uniformity;
