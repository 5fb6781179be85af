use super::token::token_enum;

token_enum! {
    /// Visual style of a spinner. Each style has one entry in the spinner
    /// catalogue describing how many cells it is drawn with.
    pub enum SpinnerType: "spinner type" {
        BallScaleMultiple => "ball-scale-multiple",
        BallSpin => "ball-spin",
        BallSpinClockwise => "ball-spin-clockwise",
        BallSpinClockwiseFadeRotating => "ball-spin-clockwise-fade-rotating",
        BallSpinFadeRotating => "ball-spin-fade-rotating",
        ChasingDots => "chasing-dots",
        Circle => "circle",
        CubeGrid => "cube-grid",
        DoubleBounce => "double-bounce",
        FadingCircle => "fading-circle",
        FoldingCube => "folding-cube",
        Pulse => "pulse",
        RectangleBounce => "rectangle-bounce",
        RectangleBounceParty => "rectangle-bounce-party",
        RectangleBouncePulseOut => "rectangle-bounce-pulse-out",
        RectangleBouncePulseOutRapid => "rectangle-bounce-pulse-out-rapid",
        RotatingPlane => "rotating-plane",
        SquareJellyBox => "square-jelly-box",
        SquareLoader => "square-loader",
        ThreeBounce => "three-bounce",
        ThreeStrings => "three-strings",
        WanderingCubes => "wandering-cubes",
    }
}
