//! Full pipeline through the public API: mock controller, transaction
//! engine, MPU-6050 driver, attitude loop, shared state and telemetry.

use mpu_attitude::devices::imu::mpu6050::{registers, GyroRange, Mpu6050, Mpu6050Config, ReadMode};
use mpu_attitude::devices::traits::{ImuError, ImuSensor};
use mpu_attitude::platform::mock::{MockI2cController, MockTicks, MockTrigger};
use mpu_attitude::platform::traits::{I2cConfig, I2cStatus};
use mpu_attitude::platform::{I2cError, TransactionEngine};
use mpu_attitude::subsystems::ahrs::{AttitudeConfig, AttitudeLoop, SharedAttitudeState};

type Engine = TransactionEngine<MockI2cController, MockTicks>;

fn mpu6050(config: Mpu6050Config) -> Mpu6050<Engine> {
    let mut bus = MockI2cController::new(registers::MPU6050_ADDR);
    bus.set_register(registers::WHO_AM_I, registers::MPU6050_WHO_AM_I_VALUE);
    let engine = TransactionEngine::new(
        bus,
        MockTicks::auto_advance(1),
        I2cConfig { timeout_ticks: 128 },
    );
    let mut imu = Mpu6050::new(engine, config);
    imu.identity_check().unwrap();
    imu.init().unwrap();
    imu
}

#[test]
fn tilted_sensor_converges_in_both_read_modes() {
    for read_mode in [ReadMode::Burst, ReadMode::PerRegister] {
        let mut imu = mpu6050(Mpu6050Config {
            read_mode,
            ..Default::default()
        });
        // 45° pitch: equal X and Z acceleration at ±2 g
        let bus = imu.bus_mut().controller_mut();
        bus.set_register_i16(registers::ACCEL_XOUT_H, 11585);
        bus.set_register_i16(registers::ACCEL_ZOUT_H, 11585);

        let mut trigger = MockTrigger::new();
        let mut attitude = AttitudeLoop::new(imu, &mut trigger, AttitudeConfig::default());
        let mut sink = String::new();

        for _ in 0..400 {
            attitude.trigger_mut().fire();
            assert!(attitude.step(&mut sink).is_some());
        }

        let out = attitude.attitude();
        assert!((out.pitch - 45.0).abs() < 1e-2, "{:?}: {}", read_mode, out.pitch);
        assert!(out.roll.abs() < 1e-4);
        assert_eq!(attitude.stats().completed, 400);
        assert_eq!(sink.lines().count(), 400);
    }
}

#[test]
fn bus_fault_skips_cycles_until_recovered() {
    static SHARED: SharedAttitudeState = SharedAttitudeState::new();

    let mut imu = mpu6050(Mpu6050Config {
        gyro_range: GyroRange::Dps500,
        ..Default::default()
    });
    imu.bus_mut()
        .controller_mut()
        .set_register_i16(registers::GYRO_YOUT_H, 655);
    imu.bus_mut()
        .controller_mut()
        .set_register_i16(registers::ACCEL_ZOUT_H, 16384);

    let mut trigger = MockTrigger::new();
    let mut attitude =
        AttitudeLoop::new(imu, &mut trigger, AttitudeConfig::default()).with_shared_state(&SHARED);

    attitude.trigger_mut().fire();
    let first = attitude.poll().unwrap();
    // 655 counts at ±500 °/s = 10 °/s for 10 ms
    assert!((first.roll - 0.97 * 0.1).abs() < 1e-5);

    // Slave stops answering: every later transaction fails to acknowledge
    let engine = attitude.sensor_mut().bus_mut();
    let next = engine.controller().transactions();
    engine.controller_mut().stall(I2cStatus::TXIS, next);

    for _ in 0..3 {
        attitude.trigger_mut().fire();
        assert_eq!(attitude.poll(), None);
    }
    assert_eq!(attitude.stats().skipped, 3);
    assert_eq!(attitude.attitude(), first);
    assert_eq!(SHARED.read().cycles, 1);

    // The bus stays held after the failed transfer
    assert_eq!(
        attitude.sensor_mut().read_gyro(),
        Err(ImuError::Bus(I2cError::BusBusyTimeout))
    );

    let controller = attitude.sensor_mut().bus_mut().controller_mut();
    controller.clear_stalls();
    controller.release_bus();

    attitude.trigger_mut().fire();
    assert!(attitude.poll().is_some());
    assert_eq!(SHARED.read().cycles, 2);
    assert_eq!(trigger.cleared_count(), 5);
}
