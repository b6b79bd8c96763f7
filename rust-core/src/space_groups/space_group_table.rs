// Space-group settings table.
//
// One row per setting: sequence number, CCP4 number (0 when the setting has
// none), extended Hermann-Mauguin symbol and Hall symbol. The first row of
// each number is the reference setting.

use crate::config::SPACE_GROUP_COUNT;
use crate::space_groups::space_group::SpaceGroup;

pub static SPACE_GROUPS: [SpaceGroup; SPACE_GROUP_COUNT] = [
    // triclinic
    SpaceGroup::new(1, 1, "P 1", "P 1"),
    SpaceGroup::new(2, 2, "P -1", "-P 1"),
    // monoclinic
    SpaceGroup::new(3, 3, "P 1 2 1", "P 2y"),
    SpaceGroup::new(3, 1003, "P 1 1 2", "P 2"),
    SpaceGroup::new(3, 0, "P 2 1 1", "P 2x"),
    SpaceGroup::new(4, 4, "P 1 21 1", "P 2yb"),
    SpaceGroup::new(4, 1004, "P 1 1 21", "P 2c"),
    SpaceGroup::new(4, 0, "P 21 1 1", "P 2xa"),
    SpaceGroup::new(5, 5, "C 1 2 1", "C 2y"),
    SpaceGroup::new(5, 2005, "A 1 2 1", "A 2y"),
    SpaceGroup::new(5, 4005, "I 1 2 1", "I 2y"),
    SpaceGroup::new(5, 0, "A 1 1 2", "A 2"),
    SpaceGroup::new(5, 1005, "B 1 1 2", "B 2"),
    SpaceGroup::new(5, 0, "I 1 1 2", "I 2"),
    SpaceGroup::new(5, 0, "B 2 1 1", "B 2x"),
    SpaceGroup::new(5, 0, "C 2 1 1", "C 2x"),
    SpaceGroup::new(5, 0, "I 2 1 1", "I 2x"),
    SpaceGroup::new(6, 6, "P 1 m 1", "P -2y"),
    SpaceGroup::new(6, 0, "P 1 1 m", "P -2"),
    SpaceGroup::new(6, 0, "P m 1 1", "P -2x"),
    SpaceGroup::new(7, 7, "P 1 c 1", "P -2yc"),
    SpaceGroup::new(7, 0, "P 1 n 1", "P -2yac"),
    SpaceGroup::new(7, 0, "P 1 a 1", "P -2ya"),
    SpaceGroup::new(7, 0, "P 1 1 a", "P -2a"),
    SpaceGroup::new(7, 0, "P 1 1 n", "P -2ab"),
    SpaceGroup::new(7, 0, "P 1 1 b", "P -2b"),
    SpaceGroup::new(7, 0, "P b 1 1", "P -2xb"),
    SpaceGroup::new(7, 0, "P n 1 1", "P -2xbc"),
    SpaceGroup::new(7, 0, "P c 1 1", "P -2xc"),
    SpaceGroup::new(8, 8, "C 1 m 1", "C -2y"),
    SpaceGroup::new(8, 0, "A 1 m 1", "A -2y"),
    SpaceGroup::new(8, 0, "I 1 m 1", "I -2y"),
    SpaceGroup::new(8, 0, "A 1 1 m", "A -2"),
    SpaceGroup::new(8, 0, "B 1 1 m", "B -2"),
    SpaceGroup::new(8, 0, "I 1 1 m", "I -2"),
    SpaceGroup::new(8, 0, "B m 1 1", "B -2x"),
    SpaceGroup::new(8, 0, "C m 1 1", "C -2x"),
    SpaceGroup::new(8, 0, "I m 1 1", "I -2x"),
    SpaceGroup::new(9, 9, "C 1 c 1", "C -2yc"),
    SpaceGroup::new(9, 0, "A 1 n 1", "A -2yab"),
    SpaceGroup::new(9, 0, "I 1 a 1", "I -2ya"),
    SpaceGroup::new(9, 0, "A 1 a 1", "A -2ya"),
    SpaceGroup::new(9, 0, "C 1 n 1", "C -2yac"),
    SpaceGroup::new(9, 0, "I 1 c 1", "I -2yc"),
    SpaceGroup::new(9, 0, "A 1 1 a", "A -2a"),
    SpaceGroup::new(9, 0, "B 1 1 n", "B -2ab"),
    SpaceGroup::new(9, 0, "I 1 1 b", "I -2b"),
    SpaceGroup::new(9, 0, "B 1 1 b", "B -2b"),
    SpaceGroup::new(9, 0, "A 1 1 n", "A -2ab"),
    SpaceGroup::new(9, 0, "I 1 1 a", "I -2a"),
    SpaceGroup::new(9, 0, "B b 1 1", "B -2xb"),
    SpaceGroup::new(9, 0, "C n 1 1", "C -2xac"),
    SpaceGroup::new(9, 0, "I c 1 1", "I -2xc"),
    SpaceGroup::new(9, 0, "C c 1 1", "C -2xc"),
    SpaceGroup::new(9, 0, "B n 1 1", "B -2xab"),
    SpaceGroup::new(9, 0, "I b 1 1", "I -2xb"),
    SpaceGroup::new(10, 10, "P 1 2/m 1", "-P 2y"),
    SpaceGroup::new(10, 0, "P 1 1 2/m", "-P 2"),
    SpaceGroup::new(10, 0, "P 2/m 1 1", "-P 2x"),
    SpaceGroup::new(11, 11, "P 1 21/m 1", "-P 2yb"),
    SpaceGroup::new(11, 0, "P 1 1 21/m", "-P 2c"),
    SpaceGroup::new(11, 0, "P 21/m 1 1", "-P 2xa"),
    SpaceGroup::new(12, 12, "C 1 2/m 1", "-C 2y"),
    SpaceGroup::new(12, 0, "A 1 2/m 1", "-A 2y"),
    SpaceGroup::new(12, 0, "I 1 2/m 1", "-I 2y"),
    SpaceGroup::new(12, 0, "A 1 1 2/m", "-A 2"),
    SpaceGroup::new(12, 0, "B 1 1 2/m", "-B 2"),
    SpaceGroup::new(12, 0, "I 1 1 2/m", "-I 2"),
    SpaceGroup::new(12, 0, "B 2/m 1 1", "-B 2x"),
    SpaceGroup::new(12, 0, "C 2/m 1 1", "-C 2x"),
    SpaceGroup::new(12, 0, "I 2/m 1 1", "-I 2x"),
    SpaceGroup::new(13, 13, "P 1 2/c 1", "-P 2yc"),
    SpaceGroup::new(13, 0, "P 1 2/n 1", "-P 2yac"),
    SpaceGroup::new(13, 0, "P 1 2/a 1", "-P 2ya"),
    SpaceGroup::new(13, 0, "P 1 1 2/a", "-P 2a"),
    SpaceGroup::new(13, 0, "P 1 1 2/n", "-P 2ab"),
    SpaceGroup::new(13, 0, "P 1 1 2/b", "-P 2b"),
    SpaceGroup::new(13, 0, "P 2/b 1 1", "-P 2xb"),
    SpaceGroup::new(13, 0, "P 2/n 1 1", "-P 2xbc"),
    SpaceGroup::new(13, 0, "P 2/c 1 1", "-P 2xc"),
    SpaceGroup::new(14, 14, "P 1 21/c 1", "-P 2ybc"),
    SpaceGroup::new(14, 2014, "P 1 21/n 1", "-P 2yn"),
    SpaceGroup::new(14, 0, "P 1 21/a 1", "-P 2yab"),
    SpaceGroup::new(14, 0, "P 1 1 21/a", "-P 2ac"),
    SpaceGroup::new(14, 0, "P 1 1 21/n", "-P 2n"),
    SpaceGroup::new(14, 0, "P 1 1 21/b", "-P 2bc"),
    SpaceGroup::new(14, 0, "P 21/b 1 1", "-P 2xab"),
    SpaceGroup::new(14, 0, "P 21/n 1 1", "-P 2xn"),
    SpaceGroup::new(14, 0, "P 21/c 1 1", "-P 2xac"),
    SpaceGroup::new(15, 15, "C 1 2/c 1", "-C 2yc"),
    SpaceGroup::new(15, 0, "A 1 2/n 1", "-A 2yab"),
    SpaceGroup::new(15, 0, "I 1 2/a 1", "-I 2ya"),
    SpaceGroup::new(15, 0, "A 1 2/a 1", "-A 2ya"),
    SpaceGroup::new(15, 0, "C 1 2/n 1", "-C 2yac"),
    SpaceGroup::new(15, 0, "I 1 2/c 1", "-I 2yc"),
    SpaceGroup::new(15, 0, "A 1 1 2/a", "-A 2a"),
    SpaceGroup::new(15, 0, "B 1 1 2/n", "-B 2ab"),
    SpaceGroup::new(15, 0, "I 1 1 2/b", "-I 2b"),
    SpaceGroup::new(15, 0, "B 1 1 2/b", "-B 2b"),
    SpaceGroup::new(15, 0, "A 1 1 2/n", "-A 2ab"),
    SpaceGroup::new(15, 0, "I 1 1 2/a", "-I 2a"),
    SpaceGroup::new(15, 0, "B 2/b 1 1", "-B 2xb"),
    SpaceGroup::new(15, 0, "C 2/n 1 1", "-C 2xac"),
    SpaceGroup::new(15, 0, "I 2/c 1 1", "-I 2xc"),
    SpaceGroup::new(15, 0, "C 2/c 1 1", "-C 2xc"),
    SpaceGroup::new(15, 0, "B 2/n 1 1", "-B 2xab"),
    SpaceGroup::new(15, 0, "I 2/b 1 1", "-I 2xb"),
    // orthorhombic
    SpaceGroup::new(16, 16, "P 2 2 2", "P 2 2"),
    SpaceGroup::new(17, 17, "P 2 2 21", "P 2c 2"),
    SpaceGroup::new(17, 1017, "P 21 2 2", "P 2a 2a"),
    SpaceGroup::new(17, 2017, "P 2 21 2", "P 2 2b"),
    SpaceGroup::new(18, 18, "P 21 21 2", "P 2 2ab"),
    SpaceGroup::new(18, 0, "P 2 21 21", "P 2bc 2"),
    SpaceGroup::new(18, 0, "P 21 2 21", "P 2ac 2ac"),
    SpaceGroup::new(19, 19, "P 21 21 21", "P 2ac 2ab"),
    SpaceGroup::new(20, 20, "C 2 2 21", "C 2c 2"),
    SpaceGroup::new(20, 0, "A 21 2 2", "A 2a 2a"),
    SpaceGroup::new(20, 0, "B 2 21 2", "B 2 2b"),
    SpaceGroup::new(21, 21, "C 2 2 2", "C 2 2"),
    SpaceGroup::new(21, 0, "A 2 2 2", "A 2 2"),
    SpaceGroup::new(21, 0, "B 2 2 2", "B 2 2"),
    SpaceGroup::new(22, 22, "F 2 2 2", "F 2 2"),
    SpaceGroup::new(23, 23, "I 2 2 2", "I 2 2"),
    SpaceGroup::new(24, 24, "I 21 21 21", "I 2b 2c"),
    SpaceGroup::new(25, 25, "P m m 2", "P 2 -2"),
    SpaceGroup::new(25, 0, "P 2 m m", "P -2 2"),
    SpaceGroup::new(25, 0, "P m 2 m", "P -2 -2"),
    SpaceGroup::new(26, 26, "P m c 21", "P 2c -2"),
    SpaceGroup::new(26, 0, "P c m 21", "P 2c -2c"),
    SpaceGroup::new(26, 0, "P 21 m a", "P -2a 2a"),
    SpaceGroup::new(26, 0, "P 21 a m", "P -2 2a"),
    SpaceGroup::new(26, 0, "P b 21 m", "P -2 -2b"),
    SpaceGroup::new(26, 0, "P m 21 b", "P -2b -2"),
    SpaceGroup::new(27, 27, "P c c 2", "P 2 -2c"),
    SpaceGroup::new(27, 0, "P 2 a a", "P -2a 2"),
    SpaceGroup::new(27, 0, "P b 2 b", "P -2b -2b"),
    SpaceGroup::new(28, 28, "P m a 2", "P 2 -2a"),
    SpaceGroup::new(28, 0, "P b m 2", "P 2 -2b"),
    SpaceGroup::new(28, 0, "P 2 m b", "P -2b 2"),
    SpaceGroup::new(28, 0, "P 2 c m", "P -2c 2"),
    SpaceGroup::new(28, 0, "P c 2 m", "P -2c -2c"),
    SpaceGroup::new(28, 0, "P m 2 a", "P -2a -2a"),
    SpaceGroup::new(29, 29, "P c a 21", "P 2c -2ac"),
    SpaceGroup::new(29, 0, "P b c 21", "P 2c -2b"),
    SpaceGroup::new(29, 0, "P 21 a b", "P -2b 2a"),
    SpaceGroup::new(29, 0, "P 21 c a", "P -2ac 2a"),
    SpaceGroup::new(29, 0, "P c 21 b", "P -2bc -2c"),
    SpaceGroup::new(29, 0, "P b 21 a", "P -2a -2ab"),
    SpaceGroup::new(30, 30, "P n c 2", "P 2 -2bc"),
    SpaceGroup::new(30, 0, "P c n 2", "P 2 -2ac"),
    SpaceGroup::new(30, 0, "P 2 n a", "P -2ac 2"),
    SpaceGroup::new(30, 0, "P 2 a n", "P -2ab 2"),
    SpaceGroup::new(30, 0, "P b 2 n", "P -2ab -2ab"),
    SpaceGroup::new(30, 0, "P n 2 b", "P -2bc -2bc"),
    SpaceGroup::new(31, 31, "P m n 21", "P 2ac -2"),
    SpaceGroup::new(31, 0, "P n m 21", "P 2bc -2bc"),
    SpaceGroup::new(31, 0, "P 21 m n", "P -2ab 2ab"),
    SpaceGroup::new(31, 0, "P 21 n m", "P -2 2ac"),
    SpaceGroup::new(31, 0, "P n 21 m", "P -2 -2bc"),
    SpaceGroup::new(31, 0, "P m 21 n", "P -2ab -2"),
    SpaceGroup::new(32, 32, "P b a 2", "P 2 -2ab"),
    SpaceGroup::new(32, 0, "P 2 c b", "P -2bc 2"),
    SpaceGroup::new(32, 0, "P c 2 a", "P -2ac -2ac"),
    SpaceGroup::new(33, 33, "P n a 21", "P 2c -2n"),
    SpaceGroup::new(33, 0, "P b n 21", "P 2c -2ab"),
    SpaceGroup::new(33, 0, "P 21 n b", "P -2bc 2a"),
    SpaceGroup::new(33, 0, "P 21 c n", "P -2n 2a"),
    SpaceGroup::new(33, 0, "P c 21 n", "P -2n -2ac"),
    SpaceGroup::new(33, 0, "P n 21 a", "P -2ac -2n"),
    SpaceGroup::new(34, 34, "P n n 2", "P 2 -2n"),
    SpaceGroup::new(34, 0, "P 2 n n", "P -2n 2"),
    SpaceGroup::new(34, 0, "P n 2 n", "P -2n -2n"),
    SpaceGroup::new(35, 35, "C m m 2", "C 2 -2"),
    SpaceGroup::new(35, 0, "A 2 m m", "A -2 2"),
    SpaceGroup::new(35, 0, "B m 2 m", "B -2 -2"),
    SpaceGroup::new(36, 36, "C m c 21", "C 2c -2"),
    SpaceGroup::new(36, 0, "C c m 21", "C 2c -2c"),
    SpaceGroup::new(36, 0, "A 21 m a", "A -2a 2a"),
    SpaceGroup::new(36, 0, "A 21 a m", "A -2 2a"),
    SpaceGroup::new(36, 0, "B b 21 m", "B -2 -2b"),
    SpaceGroup::new(36, 0, "B m 21 b", "B -2b -2"),
    SpaceGroup::new(37, 37, "C c c 2", "C 2 -2c"),
    SpaceGroup::new(37, 0, "A 2 a a", "A -2a 2"),
    SpaceGroup::new(37, 0, "B b 2 b", "B -2b -2b"),
    SpaceGroup::new(38, 38, "A m m 2", "A 2 -2"),
    SpaceGroup::new(38, 0, "B m m 2", "B 2 -2"),
    SpaceGroup::new(38, 0, "B 2 m m", "B -2 2"),
    SpaceGroup::new(38, 0, "C 2 m m", "C -2 2"),
    SpaceGroup::new(38, 0, "C m 2 m", "C -2 -2"),
    SpaceGroup::new(38, 0, "A m 2 m", "A -2 -2"),
    SpaceGroup::new(39, 39, "A b m 2", "A 2 -2c"),
    SpaceGroup::new(39, 0, "B m a 2", "B 2 -2c"),
    SpaceGroup::new(39, 0, "B 2 c m", "B -2c 2"),
    SpaceGroup::new(39, 0, "C 2 m b", "C -2b 2"),
    SpaceGroup::new(39, 0, "C m 2 a", "C -2b -2b"),
    SpaceGroup::new(39, 0, "A c 2 m", "A -2c -2c"),
    SpaceGroup::new(40, 40, "A m a 2", "A 2 -2a"),
    SpaceGroup::new(40, 0, "B b m 2", "B 2 -2b"),
    SpaceGroup::new(40, 0, "B 2 m b", "B -2b 2"),
    SpaceGroup::new(40, 0, "C 2 c m", "C -2c 2"),
    SpaceGroup::new(40, 0, "C c 2 m", "C -2c -2c"),
    SpaceGroup::new(40, 0, "A m 2 a", "A -2a -2a"),
    SpaceGroup::new(41, 41, "A b a 2", "A 2 -2ac"),
    SpaceGroup::new(41, 0, "B b a 2", "B 2 -2bc"),
    SpaceGroup::new(41, 0, "B 2 c b", "B -2bc 2"),
    SpaceGroup::new(41, 0, "C 2 c b", "C -2bc 2"),
    SpaceGroup::new(41, 0, "C c 2 a", "C -2bc -2bc"),
    SpaceGroup::new(41, 0, "A c 2 a", "A -2ac -2ac"),
    SpaceGroup::new(42, 42, "F m m 2", "F 2 -2"),
    SpaceGroup::new(42, 0, "F 2 m m", "F -2 2"),
    SpaceGroup::new(42, 0, "F m 2 m", "F -2 -2"),
    SpaceGroup::new(43, 43, "F d d 2", "F 2 -2d"),
    SpaceGroup::new(43, 0, "F 2 d d", "F -2d 2"),
    SpaceGroup::new(43, 0, "F d 2 d", "F -2d -2d"),
    SpaceGroup::new(44, 44, "I m m 2", "I 2 -2"),
    SpaceGroup::new(44, 0, "I 2 m m", "I -2 2"),
    SpaceGroup::new(44, 0, "I m 2 m", "I -2 -2"),
    SpaceGroup::new(45, 45, "I b a 2", "I 2 -2c"),
    SpaceGroup::new(45, 0, "I 2 c b", "I -2a 2"),
    SpaceGroup::new(45, 0, "I c 2 a", "I -2b -2b"),
    SpaceGroup::new(46, 46, "I m a 2", "I 2 -2a"),
    SpaceGroup::new(46, 0, "I b m 2", "I 2 -2b"),
    SpaceGroup::new(46, 0, "I 2 m b", "I -2b 2"),
    SpaceGroup::new(46, 0, "I 2 c m", "I -2c 2"),
    SpaceGroup::new(46, 0, "I c 2 m", "I -2c -2c"),
    SpaceGroup::new(46, 0, "I m 2 a", "I -2a -2a"),
    SpaceGroup::new(47, 47, "P m m m", "-P 2 2"),
    SpaceGroup::new(48, 48, "P n n n :1", "P 2 2 -1n"),
    SpaceGroup::new(48, 0, "P n n n :2", "-P 2ab 2bc"),
    SpaceGroup::new(49, 49, "P c c m", "-P 2 2c"),
    SpaceGroup::new(49, 0, "P m a a", "-P 2a 2"),
    SpaceGroup::new(49, 0, "P b m b", "-P 2b 2b"),
    SpaceGroup::new(50, 50, "P b a n :1", "P 2 2 -1ab"),
    SpaceGroup::new(50, 0, "P b a n :2", "-P 2ab 2b"),
    SpaceGroup::new(50, 0, "P n c b :1", "P 2 2 -1bc"),
    SpaceGroup::new(50, 0, "P n c b :2", "-P 2b 2bc"),
    SpaceGroup::new(50, 0, "P c n a :1", "P 2 2 -1ac"),
    SpaceGroup::new(50, 0, "P c n a :2", "-P 2a 2c"),
    SpaceGroup::new(51, 51, "P m m a", "-P 2a 2a"),
    SpaceGroup::new(51, 0, "P m m b", "-P 2b 2"),
    SpaceGroup::new(51, 0, "P b m m", "-P 2 2b"),
    SpaceGroup::new(51, 0, "P c m m", "-P 2c 2c"),
    SpaceGroup::new(51, 0, "P m c m", "-P 2c 2"),
    SpaceGroup::new(51, 0, "P m a m", "-P 2 2a"),
    SpaceGroup::new(52, 52, "P n n a", "-P 2a 2bc"),
    SpaceGroup::new(52, 0, "P n n b", "-P 2b 2n"),
    SpaceGroup::new(52, 0, "P b n n", "-P 2n 2b"),
    SpaceGroup::new(52, 0, "P c n n", "-P 2ab 2c"),
    SpaceGroup::new(52, 0, "P n c n", "-P 2ab 2n"),
    SpaceGroup::new(52, 0, "P n a n", "-P 2n 2bc"),
    SpaceGroup::new(53, 53, "P m n a", "-P 2ac 2"),
    SpaceGroup::new(53, 0, "P n m b", "-P 2bc 2bc"),
    SpaceGroup::new(53, 0, "P b m n", "-P 2ab 2ab"),
    SpaceGroup::new(53, 0, "P c n m", "-P 2 2ac"),
    SpaceGroup::new(53, 0, "P n c m", "-P 2 2bc"),
    SpaceGroup::new(53, 0, "P m a n", "-P 2ab 2"),
    SpaceGroup::new(54, 54, "P c c a", "-P 2a 2ac"),
    SpaceGroup::new(54, 0, "P c c b", "-P 2b 2c"),
    SpaceGroup::new(54, 0, "P b a a", "-P 2a 2b"),
    SpaceGroup::new(54, 0, "P c a a", "-P 2ac 2c"),
    SpaceGroup::new(54, 0, "P b c b", "-P 2bc 2b"),
    SpaceGroup::new(54, 0, "P b a b", "-P 2b 2ab"),
    SpaceGroup::new(55, 55, "P b a m", "-P 2 2ab"),
    SpaceGroup::new(55, 0, "P m c b", "-P 2bc 2"),
    SpaceGroup::new(55, 0, "P c m a", "-P 2ac 2ac"),
    SpaceGroup::new(56, 56, "P c c n", "-P 2ab 2ac"),
    SpaceGroup::new(56, 0, "P n a a", "-P 2ac 2bc"),
    SpaceGroup::new(56, 0, "P b n b", "-P 2bc 2ab"),
    SpaceGroup::new(57, 57, "P b c m", "-P 2c 2b"),
    SpaceGroup::new(57, 0, "P c a m", "-P 2c 2ac"),
    SpaceGroup::new(57, 0, "P m c a", "-P 2ac 2a"),
    SpaceGroup::new(57, 0, "P m a b", "-P 2b 2a"),
    SpaceGroup::new(57, 0, "P b m a", "-P 2a 2ab"),
    SpaceGroup::new(57, 0, "P c m b", "-P 2bc 2c"),
    SpaceGroup::new(58, 58, "P n n m", "-P 2 2n"),
    SpaceGroup::new(58, 0, "P m n n", "-P 2n 2"),
    SpaceGroup::new(58, 0, "P n m n", "-P 2n 2n"),
    SpaceGroup::new(59, 59, "P m m n :1", "P 2 2ab -1ab"),
    SpaceGroup::new(59, 0, "P m m n :2", "-P 2ab 2a"),
    SpaceGroup::new(59, 0, "P n m m :1", "P 2bc 2 -1bc"),
    SpaceGroup::new(59, 0, "P n m m :2", "-P 2c 2bc"),
    SpaceGroup::new(59, 0, "P m n m :1", "P 2ac 2ac -1ac"),
    SpaceGroup::new(59, 0, "P m n m :2", "-P 2c 2a"),
    SpaceGroup::new(60, 60, "P b c n", "-P 2n 2ab"),
    SpaceGroup::new(60, 0, "P c a n", "-P 2n 2c"),
    SpaceGroup::new(60, 0, "P n c a", "-P 2a 2n"),
    SpaceGroup::new(60, 0, "P n a b", "-P 2bc 2n"),
    SpaceGroup::new(60, 0, "P b n a", "-P 2ac 2b"),
    SpaceGroup::new(60, 0, "P c n b", "-P 2b 2ac"),
    SpaceGroup::new(61, 61, "P b c a", "-P 2ac 2ab"),
    SpaceGroup::new(61, 0, "P c a b", "-P 2bc 2ac"),
    SpaceGroup::new(62, 62, "P n m a", "-P 2ac 2n"),
    SpaceGroup::new(62, 0, "P m n b", "-P 2bc 2a"),
    SpaceGroup::new(62, 0, "P b n m", "-P 2c 2ab"),
    SpaceGroup::new(62, 0, "P c m n", "-P 2n 2ac"),
    SpaceGroup::new(62, 0, "P m c n", "-P 2n 2a"),
    SpaceGroup::new(62, 0, "P n a m", "-P 2c 2n"),
    SpaceGroup::new(63, 63, "C m c m", "-C 2c 2"),
    SpaceGroup::new(63, 0, "C c m m", "-C 2c 2c"),
    SpaceGroup::new(63, 0, "A m m a", "-A 2a 2a"),
    SpaceGroup::new(63, 0, "A m a m", "-A 2 2a"),
    SpaceGroup::new(63, 0, "B b m m", "-B 2 2b"),
    SpaceGroup::new(63, 0, "B m m b", "-B 2b 2"),
    SpaceGroup::new(64, 64, "C m c a", "-C 2bc 2"),
    SpaceGroup::new(64, 0, "C c m b", "-C 2bc 2bc"),
    SpaceGroup::new(64, 0, "A b m a", "-A 2ac 2ac"),
    SpaceGroup::new(64, 0, "A c a m", "-A 2 2ac"),
    SpaceGroup::new(64, 0, "B b c m", "-B 2 2bc"),
    SpaceGroup::new(64, 0, "B m a b", "-B 2bc 2"),
    SpaceGroup::new(65, 65, "C m m m", "-C 2 2"),
    SpaceGroup::new(65, 0, "A m m m", "-A 2 2"),
    SpaceGroup::new(65, 0, "B m m m", "-B 2 2"),
    SpaceGroup::new(66, 66, "C c c m", "-C 2 2c"),
    SpaceGroup::new(66, 0, "A m a a", "-A 2a 2"),
    SpaceGroup::new(66, 0, "B b m b", "-B 2b 2b"),
    SpaceGroup::new(67, 67, "C m m a", "-C 2b 2"),
    SpaceGroup::new(67, 0, "C m m b", "-C 2b 2b"),
    SpaceGroup::new(67, 0, "A b m m", "-A 2c 2c"),
    SpaceGroup::new(67, 0, "A c m m", "-A 2 2c"),
    SpaceGroup::new(67, 0, "B m c m", "-B 2 2c"),
    SpaceGroup::new(67, 0, "B m a m", "-B 2c 2"),
    SpaceGroup::new(68, 68, "C c c a :1", "C 2 2 -1bc"),
    SpaceGroup::new(68, 0, "C c c a :2", "-C 2b 2bc"),
    SpaceGroup::new(68, 0, "C c c b :1", "C 2 2 -1bc"),
    SpaceGroup::new(68, 0, "C c c b :2", "-C 2b 2c"),
    SpaceGroup::new(68, 0, "A b a a :1", "A 2 2 -1ac"),
    SpaceGroup::new(68, 0, "A b a a :2", "-A 2a 2c"),
    SpaceGroup::new(68, 0, "A c a a :1", "A 2 2 -1ac"),
    SpaceGroup::new(68, 0, "A c a a :2", "-A 2ac 2c"),
    SpaceGroup::new(68, 0, "B b c b :1", "B 2 2 -1bc"),
    SpaceGroup::new(68, 0, "B b c b :2", "-B 2bc 2b"),
    SpaceGroup::new(68, 0, "B b a b :1", "B 2 2 -1bc"),
    SpaceGroup::new(68, 0, "B b a b :2", "-B 2b 2bc"),
    SpaceGroup::new(69, 69, "F m m m", "-F 2 2"),
    SpaceGroup::new(70, 70, "F d d d :1", "F 2 2 -1d"),
    SpaceGroup::new(70, 0, "F d d d :2", "-F 2uv 2vw"),
    SpaceGroup::new(71, 71, "I m m m", "-I 2 2"),
    SpaceGroup::new(72, 72, "I b a m", "-I 2 2c"),
    SpaceGroup::new(72, 0, "I m c b", "-I 2a 2"),
    SpaceGroup::new(72, 0, "I c m a", "-I 2b 2b"),
    SpaceGroup::new(73, 73, "I b c a", "-I 2b 2c"),
    SpaceGroup::new(73, 0, "I c a b", "-I 2a 2b"),
    SpaceGroup::new(74, 74, "I m m a", "-I 2b 2"),
    SpaceGroup::new(74, 0, "I m m b", "-I 2a 2a"),
    SpaceGroup::new(74, 0, "I b m m", "-I 2c 2c"),
    SpaceGroup::new(74, 0, "I c m m", "-I 2 2b"),
    SpaceGroup::new(74, 0, "I m c m", "-I 2 2a"),
    SpaceGroup::new(74, 0, "I m a m", "-I 2c 2"),
    // tetragonal
    SpaceGroup::new(75, 75, "P 4", "P 4"),
    SpaceGroup::new(76, 76, "P 41", "P 4w"),
    SpaceGroup::new(77, 77, "P 42", "P 4c"),
    SpaceGroup::new(78, 78, "P 43", "P 4cw"),
    SpaceGroup::new(79, 79, "I 4", "I 4"),
    SpaceGroup::new(80, 80, "I 41", "I 4bw"),
    SpaceGroup::new(81, 81, "P -4", "P -4"),
    SpaceGroup::new(82, 82, "I -4", "I -4"),
    SpaceGroup::new(83, 83, "P 4/m", "-P 4"),
    SpaceGroup::new(84, 84, "P 42/m", "-P 4c"),
    SpaceGroup::new(85, 85, "P 4/n :1", "P 4ab -1ab"),
    SpaceGroup::new(85, 0, "P 4/n :2", "-P 4a"),
    SpaceGroup::new(86, 86, "P 42/n :1", "P 4n -1n"),
    SpaceGroup::new(86, 0, "P 42/n :2", "-P 4bc"),
    SpaceGroup::new(87, 87, "I 4/m", "-I 4"),
    SpaceGroup::new(88, 88, "I 41/a :1", "I 4bw -1bw"),
    SpaceGroup::new(88, 0, "I 41/a :2", "-I 4ad"),
    SpaceGroup::new(89, 89, "P 4 2 2", "P 4 2"),
    SpaceGroup::new(90, 90, "P 4 21 2", "P 4ab 2ab"),
    SpaceGroup::new(91, 91, "P 41 2 2", "P 4w 2c"),
    SpaceGroup::new(92, 92, "P 41 21 2", "P 4abw 2nw"),
    SpaceGroup::new(93, 93, "P 42 2 2", "P 4c 2"),
    SpaceGroup::new(94, 94, "P 42 21 2", "P 4n 2n"),
    SpaceGroup::new(95, 95, "P 43 2 2", "P 4cw 2c"),
    SpaceGroup::new(96, 96, "P 43 21 2", "P 4nw 2abw"),
    SpaceGroup::new(97, 97, "I 4 2 2", "I 4 2"),
    SpaceGroup::new(98, 98, "I 41 2 2", "I 4bw 2bw"),
    SpaceGroup::new(99, 99, "P 4 m m", "P 4 -2"),
    SpaceGroup::new(100, 100, "P 4 b m", "P 4 -2ab"),
    SpaceGroup::new(101, 101, "P 42 c m", "P 4c -2c"),
    SpaceGroup::new(102, 102, "P 42 n m", "P 4n -2n"),
    SpaceGroup::new(103, 103, "P 4 c c", "P 4 -2c"),
    SpaceGroup::new(104, 104, "P 4 n c", "P 4 -2n"),
    SpaceGroup::new(105, 105, "P 42 m c", "P 4c -2"),
    SpaceGroup::new(106, 106, "P 42 b c", "P 4c -2ab"),
    SpaceGroup::new(107, 107, "I 4 m m", "I 4 -2"),
    SpaceGroup::new(108, 108, "I 4 c m", "I 4 -2c"),
    SpaceGroup::new(109, 109, "I 41 m d", "I 4bw -2"),
    SpaceGroup::new(110, 110, "I 41 c d", "I 4bw -2c"),
    SpaceGroup::new(111, 111, "P -4 2 m", "P -4 2"),
    SpaceGroup::new(112, 112, "P -4 2 c", "P -4 2c"),
    SpaceGroup::new(113, 113, "P -4 21 m", "P -4 2ab"),
    SpaceGroup::new(114, 114, "P -4 21 c", "P -4 2n"),
    SpaceGroup::new(115, 115, "P -4 m 2", "P -4 -2"),
    SpaceGroup::new(116, 116, "P -4 c 2", "P -4 -2c"),
    SpaceGroup::new(117, 117, "P -4 b 2", "P -4 -2ab"),
    SpaceGroup::new(118, 118, "P -4 n 2", "P -4 -2n"),
    SpaceGroup::new(119, 119, "I -4 m 2", "I -4 -2"),
    SpaceGroup::new(120, 120, "I -4 c 2", "I -4 -2c"),
    SpaceGroup::new(121, 121, "I -4 2 m", "I -4 2"),
    SpaceGroup::new(122, 122, "I -4 2 d", "I -4 2bw"),
    SpaceGroup::new(123, 123, "P 4/m m m", "-P 4 2"),
    SpaceGroup::new(124, 124, "P 4/m c c", "-P 4 2c"),
    SpaceGroup::new(125, 125, "P 4/n b m :1", "P 4 2 -1ab"),
    SpaceGroup::new(125, 0, "P 4/n b m :2", "-P 4a 2b"),
    SpaceGroup::new(126, 126, "P 4/n n c :1", "P 4 2 -1n"),
    SpaceGroup::new(126, 0, "P 4/n n c :2", "-P 4a 2bc"),
    SpaceGroup::new(127, 127, "P 4/m b m", "-P 4 2ab"),
    SpaceGroup::new(128, 128, "P 4/m n c", "-P 4 2n"),
    SpaceGroup::new(129, 129, "P 4/n m m :1", "P 4ab 2ab -1ab"),
    SpaceGroup::new(129, 0, "P 4/n m m :2", "-P 4a 2a"),
    SpaceGroup::new(130, 130, "P 4/n c c :1", "P 4ab 2n -1ab"),
    SpaceGroup::new(130, 0, "P 4/n c c :2", "-P 4a 2ac"),
    SpaceGroup::new(131, 131, "P 42/m m c", "-P 4c 2"),
    SpaceGroup::new(132, 132, "P 42/m c m", "-P 4c 2c"),
    SpaceGroup::new(133, 133, "P 42/n b c :1", "P 4n 2c -1n"),
    SpaceGroup::new(133, 0, "P 42/n b c :2", "-P 4ac 2b"),
    SpaceGroup::new(134, 134, "P 42/n n m :1", "P 4n 2 -1n"),
    SpaceGroup::new(134, 0, "P 42/n n m :2", "-P 4ac 2bc"),
    SpaceGroup::new(135, 135, "P 42/m b c", "-P 4c 2ab"),
    SpaceGroup::new(136, 136, "P 42/m n m", "-P 4n 2n"),
    SpaceGroup::new(137, 137, "P 42/n m c :1", "P 4n 2n -1n"),
    SpaceGroup::new(137, 0, "P 42/n m c :2", "-P 4ac 2a"),
    SpaceGroup::new(138, 138, "P 42/n c m :1", "P 4n 2ab -1n"),
    SpaceGroup::new(138, 0, "P 42/n c m :2", "-P 4ac 2ac"),
    SpaceGroup::new(139, 139, "I 4/m m m", "-I 4 2"),
    SpaceGroup::new(140, 140, "I 4/m c m", "-I 4 2c"),
    SpaceGroup::new(141, 141, "I 41/a m d :1", "I 4bw 2bw -1bw"),
    SpaceGroup::new(141, 0, "I 41/a m d :2", "-I 4bd 2"),
    SpaceGroup::new(142, 142, "I 41/a c d :1", "I 4bw 2aw -1bw"),
    SpaceGroup::new(142, 0, "I 41/a c d :2", "-I 4bd 2c"),
    // trigonal
    SpaceGroup::new(143, 143, "P 3", "P 3"),
    SpaceGroup::new(144, 144, "P 31", "P 31"),
    SpaceGroup::new(145, 145, "P 32", "P 32"),
    SpaceGroup::new(146, 146, "R 3 :H", "R 3"),
    SpaceGroup::new(146, 1146, "R 3 :R", "P 3*"),
    SpaceGroup::new(147, 147, "P -3", "-P 3"),
    SpaceGroup::new(148, 148, "R -3 :H", "-R 3"),
    SpaceGroup::new(148, 1148, "R -3 :R", "-P 3*"),
    SpaceGroup::new(149, 149, "P 3 1 2", "P 3 2"),
    SpaceGroup::new(150, 150, "P 3 2 1", "P 3 2\""),
    SpaceGroup::new(151, 151, "P 31 1 2", "P 31 2c (0 0 1)"),
    SpaceGroup::new(152, 152, "P 31 2 1", "P 31 2\""),
    SpaceGroup::new(153, 153, "P 32 1 2", "P 32 2c (0 0 -1)"),
    SpaceGroup::new(154, 154, "P 32 2 1", "P 32 2\""),
    SpaceGroup::new(155, 155, "R 3 2 :H", "R 3 2\""),
    SpaceGroup::new(155, 1155, "R 3 2 :R", "P 3* 2"),
    SpaceGroup::new(156, 156, "P 3 m 1", "P 3 -2\""),
    SpaceGroup::new(157, 157, "P 3 1 m", "P 3 -2"),
    SpaceGroup::new(158, 158, "P 3 c 1", "P 3 -2\"c"),
    SpaceGroup::new(159, 159, "P 3 1 c", "P 3 -2c"),
    SpaceGroup::new(160, 160, "R 3 m :H", "R 3 -2\""),
    SpaceGroup::new(160, 1160, "R 3 m :R", "P 3* -2"),
    SpaceGroup::new(161, 161, "R 3 c :H", "R 3 -2\"c"),
    SpaceGroup::new(161, 1161, "R 3 c :R", "P 3* -2n"),
    SpaceGroup::new(162, 162, "P -3 1 m", "-P 3 2"),
    SpaceGroup::new(163, 163, "P -3 1 c", "-P 3 2c"),
    SpaceGroup::new(164, 164, "P -3 m 1", "-P 3 2\""),
    SpaceGroup::new(165, 165, "P -3 c 1", "-P 3 2\"c"),
    SpaceGroup::new(166, 166, "R -3 m :H", "-R 3 2\""),
    SpaceGroup::new(166, 1166, "R -3 m :R", "-P 3* 2"),
    SpaceGroup::new(167, 167, "R -3 c :H", "-R 3 2\"c"),
    SpaceGroup::new(167, 1167, "R -3 c :R", "-P 3* 2n"),
    // hexagonal
    SpaceGroup::new(168, 168, "P 6", "P 6"),
    SpaceGroup::new(169, 169, "P 61", "P 61"),
    SpaceGroup::new(170, 170, "P 65", "P 65"),
    SpaceGroup::new(171, 171, "P 62", "P 62"),
    SpaceGroup::new(172, 172, "P 64", "P 64"),
    SpaceGroup::new(173, 173, "P 63", "P 6c"),
    SpaceGroup::new(174, 174, "P -6", "P -6"),
    SpaceGroup::new(175, 175, "P 6/m", "-P 6"),
    SpaceGroup::new(176, 176, "P 63/m", "-P 6c"),
    SpaceGroup::new(177, 177, "P 6 2 2", "P 6 2"),
    SpaceGroup::new(178, 178, "P 61 2 2", "P 61 2 (0 0 -1)"),
    SpaceGroup::new(179, 179, "P 65 2 2", "P 65 2 (0 0 1)"),
    SpaceGroup::new(180, 180, "P 62 2 2", "P 62 2c (0 0 1)"),
    SpaceGroup::new(181, 181, "P 64 2 2", "P 64 2c (0 0 -1)"),
    SpaceGroup::new(182, 182, "P 63 2 2", "P 6c 2c"),
    SpaceGroup::new(183, 183, "P 6 m m", "P 6 -2"),
    SpaceGroup::new(184, 184, "P 6 c c", "P 6 -2c"),
    SpaceGroup::new(185, 185, "P 63 c m", "P 6c -2"),
    SpaceGroup::new(186, 186, "P 63 m c", "P 6c -2c"),
    SpaceGroup::new(187, 187, "P -6 m 2", "P -6 2"),
    SpaceGroup::new(188, 188, "P -6 c 2", "P -6c 2"),
    SpaceGroup::new(189, 189, "P -6 2 m", "P -6 -2"),
    SpaceGroup::new(190, 190, "P -6 2 c", "P -6c -2c"),
    SpaceGroup::new(191, 191, "P 6/m m m", "-P 6 2"),
    SpaceGroup::new(192, 192, "P 6/m c c", "-P 6 2c"),
    SpaceGroup::new(193, 193, "P 63/m c m", "-P 6c 2"),
    SpaceGroup::new(194, 194, "P 63/m m c", "-P 6c 2c"),
    // cubic
    SpaceGroup::new(195, 195, "P 2 3", "P 2 2 3"),
    SpaceGroup::new(196, 196, "F 2 3", "F 2 2 3"),
    SpaceGroup::new(197, 197, "I 2 3", "I 2 2 3"),
    SpaceGroup::new(198, 198, "P 21 3", "P 2ac 2ab 3"),
    SpaceGroup::new(199, 199, "I 21 3", "I 2b 2c 3"),
    SpaceGroup::new(200, 200, "P m -3", "-P 2 2 3"),
    SpaceGroup::new(201, 201, "P n -3 :1", "P 2 2 3 -1n"),
    SpaceGroup::new(201, 0, "P n -3 :2", "-P 2ab 2bc 3"),
    SpaceGroup::new(202, 202, "F m -3", "-F 2 2 3"),
    SpaceGroup::new(203, 203, "F d -3 :1", "F 2 2 3 -1d"),
    SpaceGroup::new(203, 0, "F d -3 :2", "-F 2uv 2vw 3"),
    SpaceGroup::new(204, 204, "I m -3", "-I 2 2 3"),
    SpaceGroup::new(205, 205, "P a -3", "-P 2ac 2ab 3"),
    SpaceGroup::new(206, 206, "I a -3", "-I 2b 2c 3"),
    SpaceGroup::new(207, 207, "P 4 3 2", "P 4 2 3"),
    SpaceGroup::new(208, 208, "P 42 3 2", "P 4n 2 3"),
    SpaceGroup::new(209, 209, "F 4 3 2", "F 4 2 3"),
    SpaceGroup::new(210, 210, "F 41 3 2", "F 4d 2 3"),
    SpaceGroup::new(211, 211, "I 4 3 2", "I 4 2 3"),
    SpaceGroup::new(212, 212, "P 43 3 2", "P 4acd 2ab 3"),
    SpaceGroup::new(213, 213, "P 41 3 2", "P 4bd 2ab 3"),
    SpaceGroup::new(214, 214, "I 41 3 2", "I 4bd 2c 3"),
    SpaceGroup::new(215, 215, "P -4 3 m", "P -4 2 3"),
    SpaceGroup::new(216, 216, "F -4 3 m", "F -4 2 3"),
    SpaceGroup::new(217, 217, "I -4 3 m", "I -4 2 3"),
    SpaceGroup::new(218, 218, "P -4 3 n", "P -4n 2 3"),
    SpaceGroup::new(219, 219, "F -4 3 c", "F -4c 2 3"),
    SpaceGroup::new(220, 220, "I -4 3 d", "I -4bd 2c 3"),
    SpaceGroup::new(221, 221, "P m -3 m", "-P 4 2 3"),
    SpaceGroup::new(222, 222, "P n -3 n :1", "P 4 2 3 -1n"),
    SpaceGroup::new(222, 0, "P n -3 n :2", "-P 4a 2bc 3"),
    SpaceGroup::new(223, 223, "P m -3 n", "-P 4n 2 3"),
    SpaceGroup::new(224, 224, "P n -3 m :1", "P 4n 2 3 -1n"),
    SpaceGroup::new(224, 0, "P n -3 m :2", "-P 4bc 2bc 3"),
    SpaceGroup::new(225, 225, "F m -3 m", "-F 4 2 3"),
    SpaceGroup::new(226, 226, "F m -3 c", "-F 4c 2 3"),
    SpaceGroup::new(227, 227, "F d -3 m :1", "F 4d 2 3 -1d"),
    SpaceGroup::new(227, 0, "F d -3 m :2", "-F 4vw 2vw 3"),
    SpaceGroup::new(228, 228, "F d -3 c :1", "F 4d 2 3 -1cd"),
    SpaceGroup::new(228, 0, "F d -3 c :2", "-F 4cvw 2vw 3"),
    SpaceGroup::new(229, 229, "I m -3 m", "-I 4 2 3"),
    SpaceGroup::new(230, 230, "I a -3 d", "-I 4bd 2c 3"),
];
