/// The built-in puzzles; `0` marks an empty cell.
#[rustfmt::skip]
pub(super) const PUZZLES: [[[u8; 9]; 9]; 18] = [
    // 0
    [
        [0, 0, 0,  2, 0, 5,  0, 0, 0],
        [0, 9, 0,  0, 0, 0,  7, 3, 0],
        [0, 0, 2,  0, 0, 9,  0, 6, 0],

        [2, 0, 0,  0, 0, 0,  4, 0, 9],
        [0, 0, 0,  0, 7, 0,  0, 0, 0],
        [6, 0, 9,  0, 0, 0,  0, 0, 1],

        [0, 8, 0,  4, 0, 0,  1, 0, 0],
        [0, 6, 3,  0, 0, 0,  0, 8, 0],
        [0, 0, 0,  6, 0, 8,  0, 0, 0],
    ],
    // 1
    [
        [3, 0, 0,  9, 0, 4,  0, 0, 1],
        [0, 0, 2,  0, 0, 0,  4, 0, 0],
        [0, 6, 1,  0, 0, 0,  7, 9, 0],

        [6, 0, 0,  2, 4, 7,  0, 0, 5],
        [0, 0, 0,  0, 0, 0,  0, 0, 0],
        [2, 0, 0,  8, 3, 6,  0, 0, 4],

        [0, 4, 6,  0, 0, 0,  2, 3, 0],
        [0, 0, 9,  0, 0, 0,  6, 0, 0],
        [5, 0, 0,  3, 0, 9,  0, 0, 8],
    ],
    // 2
    [
        [0, 0, 0,  0, 1, 0,  0, 0, 0],
        [3, 0, 1,  4, 0, 0,  8, 6, 0],
        [9, 0, 0,  5, 0, 0,  2, 0, 0],

        [7, 0, 0,  1, 6, 0,  0, 0, 0],
        [0, 2, 0,  8, 0, 5,  0, 1, 0],
        [0, 0, 0,  0, 9, 7,  0, 0, 4],

        [0, 0, 3,  0, 0, 4,  0, 0, 6],
        [0, 4, 8,  0, 0, 6,  9, 0, 7],
        [0, 0, 0,  0, 8, 0,  0, 0, 0],
    ],
    // 3
    [
        [0, 0, 4,  0, 0, 3,  0, 7, 0],
        [0, 8, 0,  0, 7, 0,  0, 0, 0],
        [0, 7, 0,  0, 0, 8,  2, 0, 5],

        [4, 0, 0,  0, 0, 0,  3, 1, 0],
        [9, 0, 0,  0, 0, 0,  0, 0, 8],
        [0, 1, 5,  0, 0, 0,  0, 0, 4],

        [1, 0, 6,  9, 0, 0,  0, 3, 0],
        [0, 0, 0,  0, 2, 0,  0, 6, 0],
        [0, 2, 0,  4, 0, 0,  5, 0, 0],
    ],
    // 4
    [
        [0, 4, 3,  0, 8, 0,  2, 5, 0],
        [6, 0, 0,  0, 0, 0,  0, 0, 0],
        [0, 0, 0,  0, 0, 1,  0, 9, 4],

        [9, 0, 0,  0, 0, 4,  0, 7, 0],
        [0, 0, 0,  6, 0, 8,  0, 0, 0],
        [0, 1, 0,  2, 0, 0,  0, 0, 3],

        [8, 2, 0,  5, 0, 0,  0, 0, 0],
        [0, 0, 0,  0, 0, 0,  0, 0, 5],
        [0, 3, 4,  0, 9, 0,  7, 1, 0],
    ],
    // 5
    [
        [0, 0, 0,  0, 0, 3,  0, 6, 0],
        [0, 0, 0,  0, 0, 0,  0, 1, 0],
        [0, 9, 7,  5, 0, 0,  0, 8, 0],

        [0, 0, 0,  0, 9, 0,  2, 0, 0],
        [0, 0, 8,  0, 7, 0,  4, 0, 0],
        [0, 0, 3,  0, 6, 0,  0, 0, 0],

        [0, 1, 0,  0, 0, 2,  8, 9, 0],
        [0, 4, 0,  0, 0, 0,  0, 0, 0],
        [0, 5, 0,  1, 0, 0,  0, 0, 0],
    ],
    // 6
    [
        [1, 0, 0,  9, 0, 7,  0, 0, 3],
        [0, 8, 0,  0, 0, 0,  0, 7, 0],
        [0, 0, 9,  0, 0, 0,  6, 0, 0],

        [0, 0, 7,  2, 0, 9,  4, 0, 0],
        [4, 1, 0,  0, 0, 0,  0, 9, 5],
        [0, 0, 8,  5, 0, 4,  3, 0, 0],

        [0, 0, 3,  0, 0, 0,  7, 0, 0],
        [0, 5, 0,  0, 0, 0,  0, 4, 0],
        [2, 0, 0,  8, 0, 6,  0, 0, 9],
    ],
    // 7
    [
        [0, 0, 0,  3, 0, 2,  0, 0, 0],
        [0, 5, 0,  7, 9, 8,  0, 3, 0],
        [0, 0, 7,  0, 0, 0,  8, 0, 0],

        [0, 0, 8,  6, 0, 7,  3, 0, 0],
        [0, 7, 0,  0, 0, 0,  0, 6, 0],
        [0, 0, 3,  5, 0, 4,  1, 0, 0],

        [0, 0, 5,  0, 0, 0,  6, 0, 0],
        [0, 2, 0,  4, 1, 9,  0, 5, 0],
        [0, 0, 0,  8, 0, 6,  0, 0, 0],
    ],
    // 8
    [
        [0, 0, 0,  8, 0, 0,  0, 0, 6],
        [0, 0, 1,  6, 2, 0,  4, 3, 0],
        [4, 0, 0,  0, 7, 1,  0, 0, 2],

        [0, 0, 7,  2, 0, 0,  0, 8, 0],
        [0, 0, 0,  0, 1, 0,  0, 0, 0],
        [0, 1, 0,  0, 0, 6,  2, 0, 0],

        [1, 0, 0,  7, 3, 0,  0, 0, 4],
        [0, 2, 6,  0, 4, 8,  1, 0, 0],
        [3, 0, 0,  0, 0, 5,  0, 0, 0],
    ],
    // 9
    [
        [3, 0, 5,  0, 0, 4,  0, 7, 0],
        [0, 7, 0,  0, 0, 0,  0, 0, 1],
        [0, 4, 0,  9, 0, 0,  0, 3, 0],

        [4, 0, 0,  0, 5, 1,  0, 0, 6],
        [0, 9, 0,  0, 0, 0,  0, 4, 0],
        [2, 0, 0,  8, 4, 0,  0, 0, 7],

        [0, 2, 0,  0, 0, 7,  0, 6, 0],
        [8, 0, 0,  0, 0, 0,  0, 9, 0],
        [0, 6, 0,  4, 0, 0,  2, 0, 8],
    ],
    // 10
    [
        [0, 0, 0,  7, 0, 0,  3, 0, 0],
        [0, 6, 0,  0, 0, 0,  5, 7, 0],
        [0, 7, 3,  8, 0, 0,  4, 1, 0],

        [0, 0, 9,  2, 8, 0,  0, 0, 0],
        [5, 0, 0,  0, 0, 0,  0, 0, 9],
        [0, 0, 0,  0, 9, 3,  6, 0, 0],

        [0, 9, 8,  0, 0, 7,  1, 5, 0],
        [0, 5, 4,  0, 0, 0,  0, 6, 0],
        [0, 0, 1,  0, 0, 9,  0, 0, 0],
    ],
    // 11
    [
        [0, 0, 0,  6, 0, 0,  0, 0, 4],
        [0, 3, 0,  0, 9, 0,  0, 2, 0],
        [0, 6, 0,  8, 0, 0,  7, 0, 0],

        [0, 0, 5,  0, 6, 0,  0, 0, 1],
        [6, 7, 0,  3, 0, 1,  0, 5, 8],
        [9, 0, 0,  0, 5, 0,  4, 0, 0],

        [0, 0, 6,  0, 0, 3,  0, 9, 0],
        [0, 1, 0,  0, 8, 0,  0, 6, 0],
        [2, 0, 0,  0, 0, 6,  0, 0, 0],
    ],
    // 12
    [
        [8, 0, 0,  0, 0, 1,  0, 4, 0],
        [2, 0, 6,  0, 9, 0,  0, 1, 0],
        [0, 0, 9,  0, 0, 6,  0, 8, 0],

        [1, 2, 4,  0, 0, 0,  0, 0, 9],
        [0, 0, 0,  0, 0, 0,  0, 0, 0],
        [9, 0, 0,  0, 0, 0,  8, 2, 4],

        [0, 5, 0,  4, 0, 0,  1, 0, 0],
        [0, 8, 0,  0, 7, 0,  2, 0, 5],
        [0, 9, 0,  5, 0, 0,  0, 0, 7],
    ],
    // 13
    [
        [6, 5, 2,  0, 4, 8,  0, 0, 7],
        [0, 7, 0,  2, 0, 5,  4, 0, 0],
        [0, 0, 0,  0, 0, 0,  0, 0, 0],

        [0, 6, 4,  1, 0, 0,  0, 7, 0],
        [0, 0, 0,  0, 8, 0,  0, 0, 0],
        [0, 8, 0,  0, 0, 4,  5, 6, 0],

        [0, 0, 0,  0, 0, 0,  0, 0, 0],
        [0, 0, 8,  6, 0, 7,  0, 2, 0],
        [2, 0, 0,  8, 9, 0,  7, 5, 1],
    ],
    // 14
    [
        [0, 0, 6,  0, 0, 2,  0, 0, 9],
        [1, 0, 0,  5, 0, 0,  0, 2, 0],
        [0, 4, 7,  3, 0, 6,  0, 0, 1],

        [0, 0, 0,  0, 0, 8,  0, 4, 0],
        [0, 3, 0,  0, 0, 0,  0, 7, 0],
        [0, 1, 0,  6, 0, 0,  0, 0, 0],

        [4, 0, 0,  8, 0, 3,  2, 1, 0],
        [0, 6, 0,  0, 0, 1,  0, 0, 4],
        [3, 0, 0,  4, 0, 0,  9, 0, 0],
    ],
    // 15
    [
        [0, 0, 4,  0, 5, 0,  9, 0, 0],
        [0, 0, 0,  0, 7, 0,  0, 0, 6],
        [3, 7, 0,  0, 0, 0,  0, 0, 2],

        [0, 0, 9,  5, 0, 0,  0, 8, 0],
        [0, 0, 1,  2, 0, 4,  3, 0, 0],
        [0, 6, 0,  0, 0, 9,  2, 0, 0],

        [2, 0, 0,  0, 0, 0,  0, 9, 3],
        [1, 0, 0,  0, 4, 0,  0, 0, 0],
        [0, 0, 6,  0, 2, 0,  7, 0, 0],
    ],
    // 16
    [
        [0, 0, 0,  0, 3, 0,  7, 9, 0],
        [3, 0, 0,  0, 0, 0,  0, 0, 5],
        [0, 0, 0,  4, 0, 7,  3, 0, 6],

        [0, 5, 3,  0, 9, 4,  0, 7, 0],
        [0, 0, 0,  0, 7, 0,  0, 0, 0],
        [0, 1, 0,  8, 2, 0,  6, 4, 0],

        [7, 0, 1,  9, 0, 8,  0, 0, 0],
        [8, 0, 0,  0, 0, 0,  0, 0, 1],
        [0, 9, 4,  0, 1, 0,  0, 0, 0],
    ],
    // 17
    [
        [2, 5, 8,  1, 0, 4,  0, 3, 7],
        [9, 3, 6,  8, 2, 7,  5, 1, 4],
        [4, 7, 1,  5, 3, 0,  2, 8, 0],

        [7, 1, 5,  2, 0, 3,  0, 4, 0],
        [8, 4, 9,  6, 7, 5,  3, 2, 1],
        [3, 6, 2,  4, 1, 0,  0, 7, 5],

        [1, 2, 4,  9, 0, 0,  7, 5, 3],
        [5, 9, 3,  7, 4, 2,  1, 6, 8],
        [6, 8, 7,  3, 5, 1,  4, 9, 2],
    ],
];
