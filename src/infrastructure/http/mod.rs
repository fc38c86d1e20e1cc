mod transcript_downloader;

pub use transcript_downloader::HttpTranscriptFetcher;
