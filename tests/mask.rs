mod tests {
    use iris_composer::mask::{fill_circle, mask_bit, mask_len};

    #[test]
    fn test_mask_len_rounds_up() {
        assert_eq!(mask_len(8, 8), 8);
        assert_eq!(mask_len(10, 1), 2);
        assert_eq!(mask_len(240, 240), 7200);
    }

    #[test]
    fn test_fill_circle_center_and_corners() {
        let mut bits = [0_u8; 8];
        fill_circle(&mut bits, 8, 8, 4, 4, 3);

        assert!(mask_bit(&bits, 8, 4, 4));
        assert!(mask_bit(&bits, 8, 4, 1));
        assert!(!mask_bit(&bits, 8, 0, 0));
        assert!(!mask_bit(&bits, 8, 7, 7));
    }

    #[test]
    fn test_fill_circle_is_symmetric() {
        let mut bits = [0_u8; 32];
        fill_circle(&mut bits, 16, 16, 8, 8, 5);

        for dy in 0..5_i32 {
            for dx in 0..5_i32 {
                let q1 = mask_bit(&bits, 16, (8 + dx) as usize, (8 + dy) as usize);
                let q2 = mask_bit(&bits, 16, (8 - dx) as usize, (8 + dy) as usize);
                let q3 = mask_bit(&bits, 16, (8 + dx) as usize, (8 - dy) as usize);
                let q4 = mask_bit(&bits, 16, (8 - dx) as usize, (8 - dy) as usize);
                assert_eq!(q1, q2);
                assert_eq!(q1, q3);
                assert_eq!(q1, q4);
            }
        }
    }
}
