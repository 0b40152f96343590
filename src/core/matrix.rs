//! Matrix phase: materialize the `i * j` product table and sum it.

pub fn build_matrix(size: usize) -> Vec<Vec<u64>> {
    (0..size as u64)
        .map(|i| (0..size as u64).map(|j| i * j).collect())
        .collect()
}

pub fn matrix_sum(matrix: &[Vec<u64>]) -> u64 {
    matrix.iter().map(|row| row.iter().sum::<u64>()).sum()
}

pub fn matrix_task(size: usize) -> u64 {
    let matrix = build_matrix(size);
    matrix_sum(&matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_index_products() {
        let matrix = build_matrix(4);
        assert_eq!(matrix.len(), 4);
        assert!(matrix.iter().all(|row| row.len() == 4));
        assert_eq!(matrix[0], vec![0, 0, 0, 0]);
        assert_eq!(matrix[3], vec![0, 3, 6, 9]);
        assert_eq!(matrix[2][3], matrix[3][2]);
    }

    #[test]
    fn test_sum_of_default_matrix() {
        assert_eq!(matrix_task(500), 15_562_562_500);
        assert_eq!(matrix_task(500), 124_750u64 * 124_750);
    }

    #[test]
    fn test_sum_matches_closed_form() {
        for size in [1u64, 2, 3, 10, 77] {
            let triangle = size * (size - 1) / 2;
            assert_eq!(matrix_task(size as usize), triangle * triangle);
        }
    }
}
