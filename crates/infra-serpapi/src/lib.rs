// jobsift Infrastructure - SerpApi Adapter
// Implements: PageFetcher

mod client;

pub use client::SerpApiClient;
