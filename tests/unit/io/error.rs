//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use uniquetile::AlgorithmError;
    use uniquetile::io::error::{computation_error, invalid_configuration};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AlgorithmError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(AlgorithmError::UnsupportedSize { size: 5 }.source().is_none());
    }

    // Tests the unsupported size message names the grid and the tuned sizes
    // Verified by omitting the size from the message
    #[test]
    fn test_unsupported_size_error() {
        let message = AlgorithmError::UnsupportedSize { size: 5 }.to_string();
        assert!(message.contains("5x5"));
        assert!(message.contains("[6, 7, 8]"));
    }

    // Tests invalid configuration errors contain all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_configuration_error() {
        let error = invalid_configuration("evaluation_base", &-1.0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("evaluation_base"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
    }

    // Tests unknown column errors name the row and the column bound
    // Verified by swapping row and column in the message
    #[test]
    fn test_unknown_column_error() {
        let error = AlgorithmError::UnknownColumn {
            row: 3,
            column: 12,
            column_count: 10,
        };

        assert_eq!(
            error.to_string(),
            "Row 3 references column 12 but only 10 columns exist"
        );
    }

    // Tests piece index and partition messages
    // Verified by dropping the piece count from the message
    #[test]
    fn test_partition_errors() {
        let message = AlgorithmError::InvalidPieceIndex {
            index: 7,
            piece_count: 4,
        }
        .to_string();
        assert!(message.contains('7'));
        assert!(message.contains('4'));

        let message = AlgorithmError::PartitionViolation {
            reason: "cell (1,1) is not covered".to_string(),
        }
        .to_string();
        assert!(message.contains("cell (1,1) is not covered"));
    }

    // Tests computation errors name the failing operation
    // Verified by omitting operation from message
    #[test]
    fn test_computation_error() {
        let message = computation_error("select_pair_by_score", &"total is zero").to_string();
        assert!(message.contains("select_pair_by_score"));
        assert!(message.contains("total is zero"));
    }

    // Tests I/O errors convert into file system errors
    // Verified by converting into a computation error instead
    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::other("disk full");
        let error: AlgorithmError = io_error.into();

        assert!(matches!(error, AlgorithmError::FileSystem { .. }));
        assert!(error.to_string().contains("disk full"));
    }
}
